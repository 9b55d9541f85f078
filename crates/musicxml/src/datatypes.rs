//! Scalar MusicXML datatypes: closed keyword enumerations and small value
//! types with their wire text forms.
//!
//! Every type here parses from and prints to the exact token the MusicXML
//! schema uses, so the codec layer can treat them all as plain scalars.

use serde::Serialize;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

macro_rules! keyword_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => $text:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
        pub enum $name {
            $(#[serde(rename = $text)] $variant,)+
        }

        impl $name {
            /// The schema token for this value.
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text,)+
                }
            }

            const TOKENS: &'static [&'static str] = &[$($text),+];
        }

        impl FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($text => Ok($name::$variant),)+
                    other => Err(format!(
                        "expected one of {} for {}, got `{other}`",
                        $name::TOKENS.join(", "),
                        stringify!($name),
                    )),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

keyword_enum! {
    /// The boolean attribute form used throughout the schema.
    YesNo { Yes => "yes", No => "no" }
}

keyword_enum! {
    /// Horizontal justification of a text element.
    LeftCenterRight { Left => "left", Center => "center", Right => "right" }
}

keyword_enum! {
    /// Whether an element opens or closes a spanned structure.
    StartStop { Start => "start", Stop => "stop" }
}

keyword_enum! {
    /// How a part group is marked in the printed score.
    GroupSymbolValue {
        None => "none",
        Brace => "brace",
        Line => "line",
        Bracket => "bracket",
        Square => "square",
    }
}

keyword_enum! {
    /// Whether measure barlines are drawn across the staves of a part group.
    ///
    /// `Mensurstrich` draws barlines between the staves but not through them;
    /// its token is capitalized in the schema.
    GroupBarlineValue { Yes => "yes", No => "no", Mensurstrich => "Mensurstrich" }
}

keyword_enum! {
    /// Italic or upright text.
    FontStyle { Normal => "normal", Italic => "italic" }
}

keyword_enum! {
    FontWeight { Normal => "normal", Bold => "bold" }
}

keyword_enum! {
    /// The CSS absolute-size keywords accepted as font sizes.
    CssFontSize {
        XxSmall => "xx-small",
        XSmall => "x-small",
        Small => "small",
        Medium => "medium",
        Large => "large",
        XLarge => "x-large",
        XxLarge => "xx-large",
    }
}

keyword_enum! {
    /// An accidental name, as used inside `accidental-text`.
    AccidentalValue {
        Sharp => "sharp",
        Natural => "natural",
        Flat => "flat",
        DoubleSharp => "double-sharp",
        SharpSharp => "sharp-sharp",
        FlatFlat => "flat-flat",
    }
}

/// A font size: either a CSS keyword or a decimal point size.
///
/// Parsing tries the keyword form first, so `"small"` is a keyword and
/// `"10.5"` is a point size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FontSize {
    Css(CssFontSize),
    Point(f64),
}

impl FromStr for FontSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(css) = s.parse::<CssFontSize>() {
            return Ok(FontSize::Css(css));
        }
        s.parse::<f64>().map(FontSize::Point).map_err(|_| {
            format!("`{s}` is neither a CSS font size keyword nor a point size")
        })
    }
}

impl fmt::Display for FontSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontSize::Css(css) => css.fmt(f),
            FontSize::Point(points) => points.fmt(f),
        }
    }
}

impl From<CssFontSize> for FontSize {
    fn from(css: CssFontSize) -> Self {
        FontSize::Css(css)
    }
}

impl From<f64> for FontSize {
    fn from(points: f64) -> Self {
        FontSize::Point(points)
    }
}

/// A comma-separated token list, as used by `font-family`.
///
/// Tokens are trimmed on parse; an empty or all-whitespace input is an empty
/// list.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct CommaSeparatedText(pub Vec<String>);

impl FromStr for CommaSeparatedText {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Ok(CommaSeparatedText(Vec::new()));
        }
        Ok(CommaSeparatedText(
            s.split(',').map(|token| token.trim().to_string()).collect(),
        ))
    }
}

impl fmt::Display for CommaSeparatedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(","))
    }
}

impl From<Vec<String>> for CommaSeparatedText {
    fn from(tokens: Vec<String>) -> Self {
        CommaSeparatedText(tokens)
    }
}

impl FromIterator<String> for CommaSeparatedText {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        CommaSeparatedText(iter.into_iter().collect())
    }
}

impl From<&str> for CommaSeparatedText {
    fn from(s: &str) -> Self {
        // FromStr is infallible here.
        s.parse().unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_round_trip() {
        assert_eq!("brace".parse::<GroupSymbolValue>(), Ok(GroupSymbolValue::Brace));
        assert_eq!(GroupSymbolValue::Brace.to_string(), "brace");
        assert_eq!(
            "Mensurstrich".parse::<GroupBarlineValue>(),
            Ok(GroupBarlineValue::Mensurstrich)
        );
        assert_eq!(GroupBarlineValue::Mensurstrich.to_string(), "Mensurstrich");
    }

    #[test]
    fn test_keyword_rejects_unknown_token() {
        let err = "maybe".parse::<YesNo>().unwrap_err();
        assert!(err.contains("yes, no"));
        assert!(err.contains("`maybe`"));
        // Tokens are case-sensitive.
        assert!("mensurstrich".parse::<GroupBarlineValue>().is_err());
    }

    #[test]
    fn test_font_size_prefers_keyword() {
        assert_eq!("small".parse::<FontSize>(), Ok(FontSize::Css(CssFontSize::Small)));
        assert_eq!("10.5".parse::<FontSize>(), Ok(FontSize::Point(10.5)));
        assert!("tiny".parse::<FontSize>().is_err());
        assert_eq!(FontSize::Point(10.5).to_string(), "10.5");
        assert_eq!(FontSize::Css(CssFontSize::XxLarge).to_string(), "xx-large");
    }

    #[test]
    fn test_comma_separated_text() {
        let families: CommaSeparatedText = "Maestro, Opus".parse().unwrap();
        assert_eq!(families.0, vec!["Maestro", "Opus"]);
        assert_eq!(families.to_string(), "Maestro,Opus");
        assert_eq!("".parse::<CommaSeparatedText>().unwrap().0.len(), 0);
    }
}
