//! Style-overlay application.
//!
//! Overlay fields override the variant's default presentation; unset
//! fields leave the defaults alone. Hover-state variants become custom
//! properties the site stylesheet reads from the `:hover` rule.

use manara_types::BlockStyles;

use crate::tree::VisualNode;

/// Apply a style overlay to a block wrapper node.
pub fn apply_styles(mut node: VisualNode, styles: &BlockStyles) -> VisualNode {
    let mut set = |prop: &str, value: &Option<String>| {
        if let Some(v) = value {
            node.styles.insert(prop.to_string(), v.clone());
        }
    };

    set("background-color", &styles.background_color);
    set("background-image", &styles.background_image);
    set("color", &styles.text_color);
    set("border-radius", &styles.border_radius);
    set("border-width", &styles.border_width);
    set("border-color", &styles.border_color);
    set("box-shadow", &styles.shadow);
    set("padding", &styles.padding);
    set("padding-top", &styles.padding_top);
    set("padding-bottom", &styles.padding_bottom);
    set("margin", &styles.margin);
    set("margin-top", &styles.margin_top);
    set("margin-bottom", &styles.margin_bottom);
    set("width", &styles.width);
    set("max-width", &styles.max_width);
    set("height", &styles.height);
    set("min-height", &styles.min_height);
    set("font-size", &styles.font_size);
    set("font-weight", &styles.font_weight);
    // Hover variants as custom properties; the stylesheet's :hover rules
    // consume them.
    set("--hover-background-color", &styles.hover_background_color);
    set("--hover-color", &styles.hover_text_color);
    set("--hover-border-color", &styles.hover_border_color);
    set("--hover-box-shadow", &styles.hover_shadow);
    set("--hover-scale", &styles.hover_scale);

    if styles.border_width.is_some() {
        node.styles
            .insert("border-style".to_string(), "solid".to_string());
    }
    if let Some(align) = styles.text_align {
        node.styles
            .insert("text-align".to_string(), align.as_str().to_string());
    }
    if let Some(class) = &styles.class_name {
        node.classes.push(class.clone());
    }
    if let Some(id) = &styles.custom_id {
        node.attrs.insert("id".to_string(), id.clone());
    }
    node
}
