/// Accent colors used to tell the portals apart.
///
/// Each accent maps to a `data-accent` attribute value that the button and
/// card stylesheets key their gradients on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Accent {
    #[default]
    Blue,
    Green,
    Teal,
}

impl Accent {
    /// Value for the `data-accent` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            Accent::Blue => "blue",
            Accent::Green => "green",
            Accent::Teal => "teal",
        }
    }
}
