//! Per-tag dispatch from block instances to visual nodes.

use std::sync::Arc;

use manara_page::{LocalizedPage, PageBlockInstance};
use manara_types::{
    About, Block, ContactSection, Department, Departments, Feature, GalleryImage,
    GallerySection, HeroSlider, Icon, Jobs, JobService, Language, Slide, Stat, Testimonial,
    TestimonialsSection,
};

use crate::animate::{apply_animations, ScrollTriggers};
use crate::style::apply_styles;
use crate::tree::{VisualNode, VisualTree};

/// Rendering mode. Both modes consume the identical schema and list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderMode {
    /// Public site: animations active.
    View,
    /// Dashboard preview: editor affordances added, animations replaced
    /// with static previews.
    Edit,
}

/// The block renderer.
///
/// Holds the scroll-trigger registry so mounted scroll-animated blocks can
/// be observed and deregistered; rendering itself is synchronous and each
/// block's node is produced independently.
pub struct Renderer {
    mode: RenderMode,
    triggers: Arc<ScrollTriggers>,
}

impl Renderer {
    pub fn new(mode: RenderMode) -> Self {
        Self {
            mode,
            triggers: Arc::new(ScrollTriggers::new()),
        }
    }

    pub fn mode(&self) -> RenderMode {
        self.mode
    }

    /// Scroll-trigger registry shared with the observation layer.
    pub fn triggers(&self) -> Arc<ScrollTriggers> {
        Arc::clone(&self.triggers)
    }

    /// Render a resolved page into a visual tree, in render-sequence
    /// order. Scroll-animated blocks are registered for observation in
    /// view mode.
    pub fn render(&self, page: &LocalizedPage) -> VisualTree {
        let nodes = page
            .blocks
            .render_sequence()
            .into_iter()
            .map(|instance| self.render_instance(instance, page.lang))
            .collect();
        VisualTree {
            lang: page.lang,
            dir: page.dir,
            nodes,
        }
    }

    /// Release per-block observation state when a page leaves the view.
    pub fn unmount(&self, page: &LocalizedPage) {
        for instance in &page.blocks {
            self.triggers.deregister(&instance.id);
        }
    }

    fn render_instance(&self, instance: &PageBlockInstance, lang: Language) -> VisualNode {
        let tag = instance.tag();
        let mut wrapper = VisualNode::element("section")
            .class("block")
            .class(format!("block-{tag}"))
            .attr("data-block-id", &instance.id);

        if let Some(styles) = instance.effective_styles() {
            wrapper = apply_styles(wrapper, styles);
        }

        match self.mode {
            RenderMode::View => {
                if let Some(anim) = instance.effective_animations() {
                    wrapper = apply_animations(wrapper, anim);
                    if anim.scroll_animation {
                        self.triggers.register(&instance.id);
                    }
                }
            }
            RenderMode::Edit => {
                // Editor affordances; entrance animations are previewed as
                // a label, never played.
                wrapper = wrapper
                    .attr("data-editable", "true")
                    .attr("data-block-tag", tag.as_str());
                if let Some(anim) = instance.effective_animations() {
                    if let Some(class) = anim.entrance.css_class() {
                        wrapper = wrapper.attr("data-animation-preview", class);
                    }
                }
            }
        }

        wrapper.child(block_body(&instance.content, lang))
    }
}

/// Dispatch a block payload to its view. Exhaustive over the closed set.
fn block_body(block: &Block, lang: Language) -> VisualNode {
    match block {
        Block::HeroSlider(b) => hero_slider(b, lang),
        Block::About(b) => about(b, lang),
        Block::Departments(b) => departments(b, lang),
        Block::GallerySection(b) => gallery_section(b, lang),
        Block::TestimonialsSection(b) => testimonials_section(b, lang),
        Block::Jobs(b) => jobs(b, lang),
        Block::ContactSection(b) => contact_section(b, lang),
        Block::FeatureCard(b) => feature_card(b, lang),
        Block::StatItem(b) => stat_item(b, lang),
        Block::DepartmentCard(b) => department_card(b, lang),
        Block::GalleryItem(b) => gallery_item(b, lang),
    }
}

fn icon_node(icon: Icon) -> VisualNode {
    VisualNode::element("svg")
        .class("icon")
        .attr("data-icon", icon.as_str())
}

fn image_node(uri: &str, alt: &str) -> VisualNode {
    // Image references are opaque URIs; the media collaborator resolves
    // them downstream.
    VisualNode::element("img")
        .attr("src", uri)
        .attr("alt", alt)
}

fn hero_slider(b: &HeroSlider, lang: Language) -> VisualNode {
    let slides = b.slides_in_order().into_iter().map(|slide| hero_slide(slide, lang));
    let mut node = VisualNode::element("div")
        .class("hero-slider")
        .style("height", &b.height)
        .style("--overlay-opacity", b.overlay_opacity.to_string())
        .attr("data-autoplay", b.autoplay.to_string())
        .attr("data-interval", b.interval_ms.to_string())
        .children(slides);
    if b.show_dots {
        node = node.child(VisualNode::element("nav").class("slider-dots"));
    }
    if b.show_arrows {
        node = node.child(VisualNode::element("nav").class("slider-arrows"));
    }
    node
}

fn hero_slide(slide: &Slide, lang: Language) -> VisualNode {
    VisualNode::element("div")
        .class("slide")
        .attr("data-slide-id", &slide.id)
        .child(image_node(&slide.image, slide.title.get(lang)))
        .child(
            VisualNode::element("div")
                .class("slide-overlay")
                .child(VisualNode::text_element("h1", slide.title.get(lang)))
                .child(VisualNode::text_element("h2", slide.subtitle.get(lang)))
                .child(VisualNode::text_element("p", slide.description.get(lang))),
        )
}

fn about(b: &About, lang: Language) -> VisualNode {
    VisualNode::element("div")
        .class("about")
        .child(VisualNode::text_element("h2", b.title.get(lang)))
        .child(VisualNode::text_element("p", b.description.get(lang)))
        .child(image_node(&b.image, b.title.get(lang)))
        .child(
            VisualNode::element("ul")
                .class("features")
                .children(b.features.iter().map(|f| {
                    VisualNode::element("li").child(feature_card(f, lang))
                })),
        )
        .child(
            VisualNode::element("ul")
                .class("stats")
                .children(b.stats.iter().map(|s| {
                    VisualNode::element("li").child(stat_item(s, lang))
                })),
        )
}

fn feature_card(f: &Feature, lang: Language) -> VisualNode {
    VisualNode::element("div")
        .class("feature-card")
        .child(icon_node(f.icon))
        .child(VisualNode::text_element("h3", f.title.get(lang)))
        .child(VisualNode::text_element("p", f.description.get(lang)))
}

fn stat_item(s: &Stat, lang: Language) -> VisualNode {
    VisualNode::element("div")
        .class("stat-item")
        .child(VisualNode::text_element("strong", &s.number))
        .child(VisualNode::text_element("span", s.label.get(lang)))
}

fn departments(b: &Departments, lang: Language) -> VisualNode {
    VisualNode::element("div")
        .class("departments-grid")
        .children(b.departments.iter().map(|d| department_card(d, lang)))
}

fn department_card(d: &Department, lang: Language) -> VisualNode {
    VisualNode::element("a")
        .class("department-card")
        .attr("href", format!("/{}/{}", lang, d.slug))
        .child(image_node(&d.image, d.title.get(lang)))
        .child(VisualNode::text_element("h3", d.title.get(lang)))
        .child(VisualNode::text_element("p", d.description.get(lang)))
}

fn gallery_section(b: &GallerySection, lang: Language) -> VisualNode {
    let mut node = VisualNode::element("div")
        .class("gallery")
        .attr("data-items-per-page", b.items_per_page.to_string());
    if b.show_filters && !b.categories.is_empty() {
        node = node.child(
            VisualNode::element("nav")
                .class("gallery-filters")
                .children(b.categories.iter().map(|c| {
                    VisualNode::text_element("button", c).attr("data-category", c)
                })),
        );
    }
    node.children(b.images.iter().map(|img| gallery_item(img, lang)))
}

fn gallery_item(img: &GalleryImage, lang: Language) -> VisualNode {
    VisualNode::element("figure")
        .class("gallery-item")
        .attr("data-category", &img.category)
        .child(image_node(&img.image, img.title.get(lang)))
        .child(VisualNode::text_element("figcaption", img.title.get(lang)))
}

fn testimonials_section(b: &TestimonialsSection, _lang: Language) -> VisualNode {
    let mut node = VisualNode::element("div")
        .class("testimonials")
        .children(b.testimonials.iter().map(testimonial));
    if b.allow_submissions {
        node = node.child(
            VisualNode::element("form")
                .class("testimonial-form")
                .attr("data-submission", "testimonial"),
        );
    }
    node
}

fn testimonial(t: &Testimonial) -> VisualNode {
    // Testimonials are authored in the visitor's own language; no
    // bilingual legs to resolve.
    VisualNode::element("blockquote")
        .class("testimonial")
        .attr("data-rating", t.rating.to_string())
        .child(image_node(&t.image, &t.name))
        .child(VisualNode::text_element("p", &t.comment))
        .child(VisualNode::text_element("cite", &t.name))
}

fn jobs(b: &Jobs, lang: Language) -> VisualNode {
    VisualNode::element("div")
        .class("jobs")
        .children(b.services.iter().map(|s| job_service(s, lang)))
}

fn job_service(s: &JobService, lang: Language) -> VisualNode {
    let mut node = VisualNode::element("a")
        .class("job-card")
        .attr("href", &s.link)
        .child(icon_node(s.icon))
        .child(VisualNode::text_element("h3", s.title.get(lang)))
        .child(VisualNode::text_element("p", s.description.get(lang)));
    if !s.gradient.is_empty() {
        node = node.class(format!("gradient-{}", s.gradient));
    }
    node
}

fn contact_section(b: &ContactSection, lang: Language) -> VisualNode {
    let mut node = VisualNode::element("address")
        .class("contact")
        .child(
            VisualNode::text_element("a", &b.phone).attr("href", format!("tel:{}", b.phone)),
        )
        .child(
            VisualNode::text_element("a", &b.email).attr("href", format!("mailto:{}", b.email)),
        )
        .child(VisualNode::text_element("p", b.location.get(lang)))
        .child(VisualNode::text_element("p", b.working_hours.get(lang)));
    if let Some(phone2) = &b.phone2 {
        node = node.child(
            VisualNode::text_element("a", phone2).attr("href", format!("tel:{phone2}")),
        );
    }
    if !b.map_url.is_empty() {
        node = node.child(VisualNode::element("iframe").attr("src", &b.map_url));
    }
    node
}
