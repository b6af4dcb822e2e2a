use std::fmt;
use std::str::FromStr;

use crate::foundation::color::Rgba8;
use crate::foundation::error::{BackdropError, BackdropResult};

/// Position of a named stop within a gradient spec.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopRole {
    From,
    Via,
    To,
}

impl StopRole {
    fn prefix(self) -> &'static str {
        match self {
            Self::From => "from-",
            Self::Via => "via-",
            Self::To => "to-",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NamedStop {
    pub role: StopRole,
    /// Palette name, e.g. `purple-600`.
    pub color: String,
}

/// Utility-class gradient such as `from-purple-600 via-violet-600 to-indigo-600`.
///
/// Exactly one `from-` stop first, any number of `via-` stops, exactly one `to-` stop last.
/// Serialises as the spec string.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct GradientSpec {
    stops: Vec<NamedStop>,
}

impl GradientSpec {
    pub fn parse(spec: &str) -> BackdropResult<Self> {
        let tokens: Vec<&str> = spec.split_whitespace().collect();
        if tokens.len() < 2 {
            return Err(BackdropError::content(format!(
                "gradient '{spec}' needs at least a from- and a to- stop"
            )));
        }

        let last = tokens.len() - 1;
        let mut stops = Vec::with_capacity(tokens.len());
        for (i, tok) in tokens.iter().enumerate() {
            let role = if i == 0 {
                StopRole::From
            } else if i == last {
                StopRole::To
            } else {
                StopRole::Via
            };
            let Some(color) = tok.strip_prefix(role.prefix()) else {
                return Err(BackdropError::content(format!(
                    "gradient '{spec}': expected '{}' stop at position {i}, got '{tok}'",
                    role.prefix()
                )));
            };
            if color.is_empty() {
                return Err(BackdropError::content(format!(
                    "gradient '{spec}': empty color name in '{tok}'"
                )));
            }
            stops.push(NamedStop {
                role,
                color: color.to_owned(),
            });
        }
        Ok(Self { stops })
    }

    /// Convenience for the usual from/via/to triple. Names are not checked against the palette.
    pub fn three(from: &str, via: &str, to: &str) -> Self {
        let stop = |role, color: &str| NamedStop {
            role,
            color: color.to_owned(),
        };
        Self {
            stops: vec![
                stop(StopRole::From, from),
                stop(StopRole::Via, via),
                stop(StopRole::To, to),
            ],
        }
    }

    pub fn stops(&self) -> &[NamedStop] {
        &self.stops
    }

    /// Palette colors of every stop, in order.
    pub fn resolve(&self) -> BackdropResult<Vec<Rgba8>> {
        self.stops
            .iter()
            .map(|s| {
                palette_color(&s.color).ok_or_else(|| {
                    BackdropError::content(format!("unknown palette color '{}'", s.color))
                })
            })
            .collect()
    }

    /// CSS `linear-gradient(45deg, ...)` with resolved hex colors.
    pub fn to_css(&self) -> BackdropResult<String> {
        let colors = self.resolve()?;
        let mut css = String::from("linear-gradient(45deg");
        for c in colors {
            css.push_str(", ");
            css.push_str(&c.to_hex()[..7]);
        }
        css.push(')');
        Ok(css)
    }
}

impl fmt::Display for GradientSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, s) in self.stops.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}{}", s.role.prefix(), s.color)?;
        }
        Ok(())
    }
}

impl FromStr for GradientSpec {
    type Err = BackdropError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for GradientSpec {
    type Error = BackdropError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<GradientSpec> for String {
    fn from(g: GradientSpec) -> Self {
        g.to_string()
    }
}

/// sRGB value of a named palette color used by the page.
pub fn palette_color(name: &str) -> Option<Rgba8> {
    let hex = match name {
        "purple-400" => 0xc084fc,
        "purple-500" => 0xa855f7,
        "purple-600" => 0x9333ea,
        "violet-300" => 0xc4b5fd,
        "violet-400" => 0xa78bfa,
        "violet-500" => 0x8b5cf6,
        "violet-600" => 0x7c3aed,
        "indigo-600" => 0x4f46e5,
        "emerald-600" => 0x059669,
        "teal-600" => 0x0d9488,
        "cyan-600" => 0x0891b2,
        "fuchsia-500" => 0xd946ef,
        "fuchsia-600" => 0xc026d3,
        "orange-500" => 0xf97316,
        "rose-500" => 0xf43f5e,
        "pink-400" => 0xf472b6,
        "pink-600" => 0xdb2777,
        "white" => 0xffffff,
        "black" => 0x000000,
        _ => return None,
    };
    let [_, r, g, b] = u32::to_be_bytes(hex);
    Some(Rgba8::rgb(r, g, b))
}

#[cfg(test)]
#[path = "../../tests/unit/content/gradient.rs"]
mod tests;
