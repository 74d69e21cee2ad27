//! The closed block variant set and its leaf records.
//!
//! A [`Block`] is internally tagged on the wire: `{"type": "hero-slider",
//! ...payload}`. The variant set is exhaustive by construction — both the
//! renderer and the editor `match` on it, so adding a variant is a
//! compile-visible event everywhere it matters.
//!
//! Leaf records (slides, features, stats, ...) are owned exclusively by
//! their containing payload and have no lifecycle of their own.

use serde::{Deserialize, Serialize};
use strum::{EnumIter, EnumString, IntoStaticStr};

use crate::icon::Icon;
use crate::text::BilingualText;

/// Discriminator for the closed block variant set.
///
/// Wire form is kebab-case; `from_str` additionally accepts any case for
/// operator-typed input.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, EnumIter,
    IntoStaticStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum BlockTag {
    HeroSlider,
    About,
    Departments,
    GallerySection,
    TestimonialsSection,
    Jobs,
    ContactSection,
    FeatureCard,
    StatItem,
    DepartmentCard,
    GalleryItem,
}

impl BlockTag {
    /// Parse from the wire tag.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        <Self as std::str::FromStr>::from_str(s).ok()
    }

    /// The canonical kebab-case wire tag.
    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}

impl std::fmt::Display for BlockTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One slide of a hero slider.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Slide {
    /// Unique within its slider.
    pub id: String,
    pub title: BilingualText,
    pub subtitle: BilingualText,
    pub description: BilingualText,
    /// Opaque image URI resolved by the media collaborator.
    pub image: String,
    /// Display position; ties break by insertion order.
    pub order: i64,
}

/// Full-bleed rotating hero banner.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HeroSlider {
    pub slides: Vec<Slide>,
    pub autoplay: bool,
    /// Autoplay interval in milliseconds.
    pub interval_ms: u32,
    pub show_dots: bool,
    pub show_arrows: bool,
    /// CSS height of the slider viewport.
    pub height: String,
    /// Darkening overlay opacity, 0.0..=1.0.
    pub overlay_opacity: f32,
}

impl Default for HeroSlider {
    fn default() -> Self {
        Self {
            slides: Vec::new(),
            autoplay: true,
            interval_ms: 5000,
            show_dots: true,
            show_arrows: true,
            height: "100vh".to_string(),
            overlay_opacity: 0.4,
        }
    }
}

/// A feature bullet inside the about section (or standalone as a
/// `feature-card` block).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Feature {
    pub title: BilingualText,
    pub description: BilingualText,
    pub icon: Icon,
}

/// A headline statistic ("1200+ students").
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Stat {
    /// The figure as displayed, including any suffix ("1200+").
    pub number: String,
    pub label: BilingualText,
}

/// About-the-institution section: intro text, image, features, stats.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct About {
    pub title: BilingualText,
    pub description: BilingualText,
    pub image: String,
    pub features: Vec<Feature>,
    pub stats: Vec<Stat>,
}

/// One department card.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Department {
    pub id: String,
    pub title: BilingualText,
    pub description: BilingualText,
    pub image: String,
    /// Slug of the department's own page.
    pub slug: String,
}

/// Grid of department cards.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Departments {
    pub departments: Vec<Department>,
}

/// One gallery image with an optional filter category.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GalleryImage {
    pub id: String,
    pub title: BilingualText,
    pub description: BilingualText,
    pub image: String,
    pub category: String,
}

/// Filterable image gallery.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GallerySection {
    pub images: Vec<GalleryImage>,
    pub categories: Vec<String>,
    pub show_filters: bool,
    pub items_per_page: u32,
}

impl Default for GallerySection {
    fn default() -> Self {
        Self {
            images: Vec::new(),
            categories: Vec::new(),
            show_filters: true,
            items_per_page: 12,
        }
    }
}

/// One parent/student testimonial.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Testimonial {
    pub id: String,
    pub name: String,
    pub image: String,
    /// Star rating, 1..=5.
    pub rating: u8,
    pub comment: String,
}

/// Testimonials carousel.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TestimonialsSection {
    pub testimonials: Vec<Testimonial>,
    /// Whether visitors may submit new testimonials.
    pub allow_submissions: bool,
}

/// One offered service/position on the jobs section.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobService {
    pub title: BilingualText,
    pub description: BilingualText,
    pub icon: Icon,
    /// Target path for the card's call to action.
    pub link: String,
    /// Decorative gradient preset name.
    pub gradient: String,
}

/// Jobs / services section.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Jobs {
    pub services: Vec<JobService>,
}

/// Contact details section.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactSection {
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone2: Option<String>,
    pub email: String,
    pub location: BilingualText,
    /// Embedded map URL, passed through opaquely.
    pub map_url: String,
    pub working_hours: BilingualText,
}

/// A typed page content block.
///
/// The four `*Card`/`*Item` variants reuse the corresponding leaf record as
/// a standalone block, for pages that compose individual cards directly.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Block {
    HeroSlider(HeroSlider),
    About(About),
    Departments(Departments),
    GallerySection(GallerySection),
    TestimonialsSection(TestimonialsSection),
    Jobs(Jobs),
    ContactSection(ContactSection),
    FeatureCard(Feature),
    StatItem(Stat),
    DepartmentCard(Department),
    GalleryItem(GalleryImage),
}

impl Block {
    /// The discriminator for this variant.
    pub fn tag(&self) -> BlockTag {
        match self {
            Block::HeroSlider(_) => BlockTag::HeroSlider,
            Block::About(_) => BlockTag::About,
            Block::Departments(_) => BlockTag::Departments,
            Block::GallerySection(_) => BlockTag::GallerySection,
            Block::TestimonialsSection(_) => BlockTag::TestimonialsSection,
            Block::Jobs(_) => BlockTag::Jobs,
            Block::ContactSection(_) => BlockTag::ContactSection,
            Block::FeatureCard(_) => BlockTag::FeatureCard,
            Block::StatItem(_) => BlockTag::StatItem,
            Block::DepartmentCard(_) => BlockTag::DepartmentCard,
            Block::GalleryItem(_) => BlockTag::GalleryItem,
        }
    }

    /// An empty payload for the given tag, for the editor's "add block".
    pub fn empty(tag: BlockTag) -> Self {
        match tag {
            BlockTag::HeroSlider => Block::HeroSlider(HeroSlider::default()),
            BlockTag::About => Block::About(About::default()),
            BlockTag::Departments => Block::Departments(Departments::default()),
            BlockTag::GallerySection => Block::GallerySection(GallerySection::default()),
            BlockTag::TestimonialsSection => {
                Block::TestimonialsSection(TestimonialsSection::default())
            }
            BlockTag::Jobs => Block::Jobs(Jobs::default()),
            BlockTag::ContactSection => Block::ContactSection(ContactSection::default()),
            BlockTag::FeatureCard => Block::FeatureCard(Feature::default()),
            BlockTag::StatItem => Block::StatItem(Stat::default()),
            BlockTag::DepartmentCard => Block::DepartmentCard(Department::default()),
            BlockTag::GalleryItem => Block::GalleryItem(GalleryImage::default()),
        }
    }
}

/// Slides sorted for display: by `order`, stable on ties.
pub(crate) fn sorted_slides(slides: &[Slide]) -> Vec<&Slide> {
    let mut out: Vec<&Slide> = slides.iter().collect();
    out.sort_by_key(|s| s.order);
    out
}

impl HeroSlider {
    /// Slides in display order.
    pub fn slides_in_order(&self) -> Vec<&Slide> {
        sorted_slides(&self.slides)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::Language;
    use strum::IntoEnumIterator;

    #[test]
    fn test_tag_wire_form() {
        assert_eq!(BlockTag::HeroSlider.as_str(), "hero-slider");
        assert_eq!(BlockTag::TestimonialsSection.as_str(), "testimonials-section");
        assert_eq!(BlockTag::from_str("gallery-item"), Some(BlockTag::GalleryItem));
        assert_eq!(BlockTag::from_str("bogus"), None);
    }

    #[test]
    fn test_empty_payload_for_every_tag() {
        for tag in BlockTag::iter() {
            assert_eq!(Block::empty(tag).tag(), tag);
        }
    }

    #[test]
    fn test_block_serde_tagging() {
        let block = Block::StatItem(Stat {
            number: "1200+".into(),
            label: BilingualText::new("طالب", "students"),
        });
        let v = serde_json::to_value(&block).unwrap();
        assert_eq!(v["type"], "stat-item");
        assert_eq!(v["number"], "1200+");
        let back: Block = serde_json::from_value(v).unwrap();
        assert_eq!(back, block);
    }

    #[test]
    fn test_slides_sorted_stable_on_ties() {
        let mk = |id: &str, order: i64| Slide {
            id: id.into(),
            order,
            ..Slide::default()
        };
        let slider = HeroSlider {
            slides: vec![mk("b", 2), mk("a", 1), mk("c", 2)],
            ..HeroSlider::default()
        };
        let ids: Vec<&str> = slider.slides_in_order().iter().map(|s| s.id.as_str()).collect();
        // "b" before "c": equal order keeps insertion order.
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_bilingual_leaf_resolution() {
        let f = Feature {
            title: BilingualText::new("النقل", "Transport"),
            description: BilingualText::default(),
            icon: Icon::Bus,
        };
        assert_eq!(f.title.get(Language::En), "Transport");
        assert_eq!(f.icon.as_str(), "Bus");
    }
}
