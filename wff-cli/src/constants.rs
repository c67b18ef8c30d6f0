use crate::terminal::StyleId;

pub(crate) const ASCII_ART: &str = r#"
     ┌─────────────────────────────┐
     │  w f f   ⊤ ∧ ⟘ ∨ ¬ → ⇔  0.1 │
     └─────────────────────────────┘
"#;
pub(crate) const STYLE_LOGO: StyleId = 0;
pub(crate) const STYLE_INFO: StyleId = 1;
pub(crate) const STYLE_FORMULA: StyleId = 2;
pub(crate) const STYLE_HEADER: StyleId = 3;
pub(crate) const STYLE_TRUE: StyleId = 4;
pub(crate) const STYLE_FALSE: StyleId = 5;
