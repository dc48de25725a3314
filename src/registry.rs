use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

use crate::custom::{CustomComponent, CustomStore};
use crate::props::{PropField, PropMap, PropValue, PropWidget};

/// The closed set of built-in component kinds.
///
/// Tags are the serialized form used in documents and save payloads;
/// `parse` is the only way a string tag becomes a kind, so there is no
/// stringly-typed dispatch anywhere downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuiltinKind {
    Hero,
    Text,
    Image,
    Button,
    Columns,
    Spacer,
    Video,
    Gallery,
    Testimonial,
    Pricing,
    Form,
    Stats,
    Cta,
    Accordion,
    Team,
}

pub const BUILTIN_KINDS: &[BuiltinKind] = &[
    BuiltinKind::Hero,
    BuiltinKind::Text,
    BuiltinKind::Image,
    BuiltinKind::Button,
    BuiltinKind::Columns,
    BuiltinKind::Spacer,
    BuiltinKind::Video,
    BuiltinKind::Gallery,
    BuiltinKind::Testimonial,
    BuiltinKind::Pricing,
    BuiltinKind::Form,
    BuiltinKind::Stats,
    BuiltinKind::Cta,
    BuiltinKind::Accordion,
    BuiltinKind::Team,
];

impl BuiltinKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BuiltinKind::Hero => "hero",
            BuiltinKind::Text => "text",
            BuiltinKind::Image => "image",
            BuiltinKind::Button => "button",
            BuiltinKind::Columns => "columns",
            BuiltinKind::Spacer => "spacer",
            BuiltinKind::Video => "video",
            BuiltinKind::Gallery => "gallery",
            BuiltinKind::Testimonial => "testimonial",
            BuiltinKind::Pricing => "pricing",
            BuiltinKind::Form => "form",
            BuiltinKind::Stats => "stats",
            BuiltinKind::Cta => "cta",
            BuiltinKind::Accordion => "accordion",
            BuiltinKind::Team => "team",
        }
    }

    pub fn parse(tag: &str) -> Option<BuiltinKind> {
        BUILTIN_KINDS.iter().copied().find(|k| k.as_str() == tag)
    }
}

/// An immutable, registry-owned component definition: display metadata,
/// the initial property set and the edit-form schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentDefinition {
    #[serde(rename = "type")]
    pub type_tag: String,
    pub name: String,
    pub icon: String,
    pub default_props: PropMap,
    pub editable_props: Vec<PropField>,
}

/// A definition resolved through the combined registry. Custom components
/// get their own variant so template rendering stays an explicit path.
#[derive(Debug, Clone, Copy)]
pub enum Definition<'a> {
    Builtin(BuiltinKind, &'static ComponentDefinition),
    Custom(&'a CustomComponent),
}

impl<'a> Definition<'a> {
    pub fn name(&self) -> &str {
        match self {
            Definition::Builtin(_, def) => &def.name,
            Definition::Custom(custom) => &custom.name,
        }
    }

    pub fn default_props(&self) -> &PropMap {
        match self {
            Definition::Builtin(_, def) => &def.default_props,
            Definition::Custom(custom) => &custom.default_props,
        }
    }

    pub fn editable_props(&self) -> &[PropField] {
        match self {
            Definition::Builtin(_, def) => &def.editable_props,
            Definition::Custom(custom) => &custom.editable_props,
        }
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, Definition::Custom(_))
    }
}

/// Combined lookup view over the built-in catalog and a custom store.
/// Type tags are globally unique by construction: custom tags carry a
/// UUID suffix and can never equal a built-in tag.
#[derive(Debug, Clone, Copy)]
pub struct Registry<'a> {
    custom: &'a CustomStore,
}

impl<'a> Registry<'a> {
    pub fn new(custom: &'a CustomStore) -> Self {
        Self { custom }
    }

    pub fn definition(&self, type_tag: &str) -> Option<Definition<'a>> {
        if let Some(custom) = self.custom.get(type_tag) {
            return Some(Definition::Custom(custom));
        }
        BuiltinKind::parse(type_tag).map(|kind| Definition::Builtin(kind, builtin_definition(kind)))
    }

    pub fn custom_store(&self) -> &'a CustomStore {
        self.custom
    }
}

/// Look up the static definition for a built-in kind.
pub fn builtin_definition(kind: BuiltinKind) -> &'static ComponentDefinition {
    let index = BUILTIN_KINDS
        .iter()
        .position(|k| *k == kind)
        .unwrap_or_default();
    &builtin_definitions()[index]
}

/// The static built-in catalog, built once. One definition per
/// `BuiltinKind`, in `BUILTIN_KINDS` order.
pub fn builtin_definitions() -> &'static [ComponentDefinition] {
    static CATALOG: OnceLock<Vec<ComponentDefinition>> = OnceLock::new();
    CATALOG.get_or_init(build_catalog)
}

fn props(entries: Vec<(&str, PropValue)>) -> PropMap {
    entries
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect()
}

fn select(options: &[&str]) -> PropWidget {
    PropWidget::Select {
        options: options.iter().map(|o| o.to_string()).collect(),
    }
}

fn map_value(entries: Vec<(&str, PropValue)>) -> PropValue {
    PropValue::Map(
        entries
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect(),
    )
}

fn definition(
    kind: BuiltinKind,
    name: &str,
    icon: &str,
    default_props: PropMap,
    editable_props: Vec<PropField>,
) -> ComponentDefinition {
    ComponentDefinition {
        type_tag: kind.as_str().to_string(),
        name: name.to_string(),
        icon: icon.to_string(),
        default_props,
        editable_props,
    }
}

fn build_catalog() -> Vec<ComponentDefinition> {
    vec![
        definition(
            BuiltinKind::Hero,
            "Hero Section",
            "Layout",
            props(vec![
                ("title", "Welcome to Our Website".into()),
                (
                    "subtitle",
                    "Create amazing experiences with our platform".into(),
                ),
                (
                    "backgroundImage",
                    "https://images.pexels.com/photos/1714208/pexels-photo-1714208.jpeg".into(),
                ),
                ("buttonText", "Get Started".into()),
                ("buttonLink", "#".into()),
                ("textAlign", "center".into()),
            ]),
            vec![
                PropField::new("title", "Title", PropWidget::Text),
                PropField::new("subtitle", "Subtitle", PropWidget::Textarea),
                PropField::new("backgroundImage", "Background Image URL", PropWidget::Text),
                PropField::new("buttonText", "Button Text", PropWidget::Text),
                PropField::new("buttonLink", "Button Link", PropWidget::Text),
                PropField::new(
                    "textAlign",
                    "Text Alignment",
                    select(&["left", "center", "right"]),
                ),
            ],
        ),
        definition(
            BuiltinKind::Text,
            "Text Block",
            "Type",
            props(vec![
                ("content", "Add your text content here...".into()),
                ("fontSize", "base".into()),
                ("textAlign", "left".into()),
                ("color", "#000000".into()),
            ]),
            vec![
                PropField::new("content", "Content", PropWidget::Textarea),
                PropField::new(
                    "fontSize",
                    "Font Size",
                    select(&["sm", "base", "lg", "xl", "2xl", "3xl"]),
                ),
                PropField::new(
                    "textAlign",
                    "Text Alignment",
                    select(&["left", "center", "right"]),
                ),
                PropField::new("color", "Text Color", PropWidget::Color),
            ],
        ),
        definition(
            BuiltinKind::Image,
            "Image",
            "Image",
            props(vec![
                (
                    "src",
                    "https://images.pexels.com/photos/3184291/pexels-photo-3184291.jpeg".into(),
                ),
                ("alt", "Beautiful landscape".into()),
                ("width", "100%".into()),
                ("height", "auto".into()),
                ("borderRadius", 0i64.into()),
            ]),
            vec![
                PropField::new("src", "Image URL", PropWidget::Text),
                PropField::new("alt", "Alt Text", PropWidget::Text),
                PropField::new("width", "Width", PropWidget::Text),
                PropField::new("height", "Height", PropWidget::Text),
                PropField::new("borderRadius", "Border Radius (px)", PropWidget::Number),
            ],
        ),
        definition(
            BuiltinKind::Button,
            "Button",
            "MousePointer",
            props(vec![
                ("text", "Click Me".into()),
                ("link", "#".into()),
                ("variant", "primary".into()),
                ("size", "medium".into()),
            ]),
            vec![
                PropField::new("text", "Button Text", PropWidget::Text),
                PropField::new("link", "Link URL", PropWidget::Text),
                PropField::new(
                    "variant",
                    "Style",
                    select(&["primary", "secondary", "outline"]),
                ),
                PropField::new("size", "Size", select(&["small", "medium", "large"])),
            ],
        ),
        definition(
            BuiltinKind::Columns,
            "Columns",
            "Columns",
            props(vec![("columnCount", 2i64.into()), ("gap", "4".into())]),
            vec![
                PropField::new(
                    "columnCount",
                    "Number of Columns",
                    select(&["1", "2", "3", "4"]),
                ),
                PropField::new("gap", "Gap Size", select(&["2", "4", "6", "8"])),
            ],
        ),
        definition(
            BuiltinKind::Spacer,
            "Spacer",
            "Minus",
            props(vec![("height", "4".into())]),
            vec![PropField::new(
                "height",
                "Height (rem)",
                select(&["1", "2", "4", "6", "8", "12"]),
            )],
        ),
        definition(
            BuiltinKind::Video,
            "Video",
            "Play",
            props(vec![
                ("src", "https://www.youtube.com/embed/dQw4w9WgXcQ".into()),
                ("width", "100%".into()),
                ("height", "400px".into()),
                ("autoplay", false.into()),
                ("controls", true.into()),
            ]),
            vec![
                PropField::new("src", "Video URL (YouTube/Vimeo embed)", PropWidget::Text),
                PropField::new("width", "Width", PropWidget::Text),
                PropField::new("height", "Height", PropWidget::Text),
                PropField::new("autoplay", "Autoplay", PropWidget::Boolean),
                PropField::new("controls", "Show Controls", PropWidget::Boolean),
            ],
        ),
        definition(
            BuiltinKind::Gallery,
            "Image Gallery",
            "Images",
            props(vec![
                (
                    "images",
                    PropValue::List(vec![
                        "https://images.pexels.com/photos/3184291/pexels-photo-3184291.jpeg".into(),
                        "https://images.pexels.com/photos/3184338/pexels-photo-3184338.jpeg".into(),
                        "https://images.pexels.com/photos/3184465/pexels-photo-3184465.jpeg".into(),
                    ]),
                ),
                ("columns", "3".into()),
                ("gap", "4".into()),
                ("borderRadius", 8i64.into()),
            ]),
            vec![
                PropField::new("columns", "Columns", select(&["1", "2", "3", "4", "5"])),
                PropField::new("gap", "Gap Size", select(&["2", "4", "6", "8"])),
                PropField::new("borderRadius", "Border Radius (px)", PropWidget::Number),
            ],
        ),
        definition(
            BuiltinKind::Testimonial,
            "Testimonial",
            "Quote",
            props(vec![
                (
                    "quote",
                    "This product has completely transformed our business. The results speak for themselves."
                        .into(),
                ),
                ("author", "Sarah Johnson".into()),
                ("position", "CEO, TechCorp".into()),
                (
                    "avatar",
                    "https://images.pexels.com/photos/774909/pexels-photo-774909.jpeg".into(),
                ),
                ("rating", 5i64.into()),
            ]),
            vec![
                PropField::new("quote", "Quote", PropWidget::Textarea),
                PropField::new("author", "Author Name", PropWidget::Text),
                PropField::new("position", "Position/Company", PropWidget::Text),
                PropField::new("avatar", "Avatar URL", PropWidget::Text),
                PropField::new("rating", "Rating (1-5)", select(&["1", "2", "3", "4", "5"])),
            ],
        ),
        definition(
            BuiltinKind::Pricing,
            "Pricing Card",
            "CreditCard",
            props(vec![
                ("title", "Pro Plan".into()),
                ("price", "$29".into()),
                ("period", "per month".into()),
                (
                    "features",
                    PropValue::List(vec![
                        "10 Projects".into(),
                        "Priority Support".into(),
                        "Advanced Analytics".into(),
                        "Custom Integrations".into(),
                    ]),
                ),
                ("buttonText", "Get Started".into()),
                ("buttonLink", "#".into()),
                ("featured", false.into()),
            ]),
            vec![
                PropField::new("title", "Plan Title", PropWidget::Text),
                PropField::new("price", "Price", PropWidget::Text),
                PropField::new("period", "Billing Period", PropWidget::Text),
                PropField::new("buttonText", "Button Text", PropWidget::Text),
                PropField::new("buttonLink", "Button Link", PropWidget::Text),
                PropField::new("featured", "Featured Plan", PropWidget::Boolean),
            ],
        ),
        definition(
            BuiltinKind::Form,
            "Contact Form",
            "Mail",
            props(vec![
                ("title", "Get in Touch".into()),
                (
                    "subtitle",
                    "We'd love to hear from you. Send us a message and we'll respond as soon as possible."
                        .into(),
                ),
                (
                    "fields",
                    PropValue::List(vec!["name".into(), "email".into(), "message".into()]),
                ),
                ("buttonText", "Send Message".into()),
            ]),
            vec![
                PropField::new("title", "Form Title", PropWidget::Text),
                PropField::new("subtitle", "Form Subtitle", PropWidget::Textarea),
                PropField::new("buttonText", "Submit Button Text", PropWidget::Text),
            ],
        ),
        definition(
            BuiltinKind::Stats,
            "Statistics",
            "BarChart3",
            props(vec![(
                "stats",
                PropValue::List(vec![
                    map_value(vec![
                        ("number", "10K+".into()),
                        ("label", "Happy Customers".into()),
                    ]),
                    map_value(vec![
                        ("number", "99%".into()),
                        ("label", "Satisfaction Rate".into()),
                    ]),
                    map_value(vec![
                        ("number", "24/7".into()),
                        ("label", "Support Available".into()),
                    ]),
                    map_value(vec![
                        ("number", "50+".into()),
                        ("label", "Countries Served".into()),
                    ]),
                ]),
            )]),
            vec![],
        ),
        definition(
            BuiltinKind::Cta,
            "Call to Action",
            "Megaphone",
            props(vec![
                ("title", "Ready to Get Started?".into()),
                (
                    "subtitle",
                    "Join thousands of satisfied customers who have transformed their business with our solution."
                        .into(),
                ),
                ("primaryButtonText", "Start Free Trial".into()),
                ("primaryButtonLink", "#".into()),
                ("secondaryButtonText", "Learn More".into()),
                ("secondaryButtonLink", "#".into()),
                ("backgroundColor", "#f8fafc".into()),
            ]),
            vec![
                PropField::new("title", "Title", PropWidget::Text),
                PropField::new("subtitle", "Subtitle", PropWidget::Textarea),
                PropField::new("primaryButtonText", "Primary Button Text", PropWidget::Text),
                PropField::new("primaryButtonLink", "Primary Button Link", PropWidget::Text),
                PropField::new(
                    "secondaryButtonText",
                    "Secondary Button Text",
                    PropWidget::Text,
                ),
                PropField::new(
                    "secondaryButtonLink",
                    "Secondary Button Link",
                    PropWidget::Text,
                ),
                PropField::new("backgroundColor", "Background Color", PropWidget::Color),
            ],
        ),
        definition(
            BuiltinKind::Accordion,
            "FAQ Accordion",
            "ChevronDown",
            props(vec![
                ("title", "Frequently Asked Questions".into()),
                (
                    "items",
                    PropValue::List(vec![
                        map_value(vec![
                            ("question", "How does the free trial work?".into()),
                            (
                                "answer",
                                "You get full access to all features for 14 days, no credit card required."
                                    .into(),
                            ),
                        ]),
                        map_value(vec![
                            ("question", "Can I cancel anytime?".into()),
                            (
                                "answer",
                                "Yes, you can cancel your subscription at any time with no penalties."
                                    .into(),
                            ),
                        ]),
                        map_value(vec![
                            ("question", "Do you offer customer support?".into()),
                            (
                                "answer",
                                "We provide 24/7 customer support via email, chat, and phone.".into(),
                            ),
                        ]),
                    ]),
                ),
            ]),
            vec![PropField::new("title", "Section Title", PropWidget::Text)],
        ),
        definition(
            BuiltinKind::Team,
            "Team Member",
            "Users",
            props(vec![
                ("name", "Alex Thompson".into()),
                ("position", "Lead Developer".into()),
                (
                    "bio",
                    "Alex has over 8 years of experience in full-stack development and leads our technical team."
                        .into(),
                ),
                (
                    "image",
                    "https://images.pexels.com/photos/220453/pexels-photo-220453.jpeg".into(),
                ),
                (
                    "social",
                    map_value(vec![
                        ("linkedin", "#".into()),
                        ("twitter", "#".into()),
                        ("github", "#".into()),
                    ]),
                ),
            ]),
            vec![
                PropField::new("name", "Name", PropWidget::Text),
                PropField::new("position", "Position", PropWidget::Text),
                PropField::new("bio", "Bio", PropWidget::Textarea),
                PropField::new("image", "Profile Image URL", PropWidget::Text),
            ],
        ),
    ]
}
