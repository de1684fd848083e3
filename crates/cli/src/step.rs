//! Scripted steps accepted on the command line.

use std::fmt;
use std::str::FromStr;

use anyhow::{Context, anyhow, bail};

/// Item reference as typed by the user: a numeric id or a catalog name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ItemRef {
    Id(u32),
    Name(String),
}

impl FromStr for ItemRef {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            bail!("missing item");
        }
        Ok(s.parse::<u32>()
            .map(Self::Id)
            .unwrap_or_else(|_| Self::Name(s.replace('_', " "))))
    }
}

impl fmt::Display for ItemRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "{id}"),
            Self::Name(name) => f.write_str(name),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Step {
    Status,
    /// Moves the clock forward without acting.
    Wait { hours: f64 },
    Eat(ItemRef),
    Drink(ItemRef),
    Sleep { hours: u32 },
    Wash { kind: String, item: Option<ItemRef> },
    Medicine(ItemRef),
    /// Adds items to the character's inventory.
    Give { item: ItemRef, quantity: u32 },
}

impl FromStr for Step {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        let mut parts = s.split(':');
        let verb = parts.next().unwrap_or_default();
        let arg = parts.next();
        let extra = parts.next();

        let required = |what: &str| arg.ok_or_else(|| anyhow!("'{verb}' needs {what}"));

        let step = match verb {
            "status" => Self::Status,
            "wait" => {
                let hours: f64 = required("hours")?
                    .parse()
                    .with_context(|| format!("invalid wait in '{s}'"))?;
                if !hours.is_finite() || hours < 0.0 {
                    bail!("wait hours must be non-negative");
                }
                Self::Wait { hours }
            }
            "eat" => Self::Eat(required("an item")?.parse()?),
            "drink" => Self::Drink(required("an item")?.parse()?),
            "sleep" => Self::Sleep {
                hours: required("hours")?
                    .parse()
                    .with_context(|| format!("invalid sleep in '{s}'"))?,
            },
            "wash" => Self::Wash {
                kind: required("a hygiene action")?.to_string(),
                item: extra.map(str::parse::<ItemRef>).transpose()?,
            },
            "medicine" => Self::Medicine(required("an item")?.parse()?),
            "give" => Self::Give {
                item: required("an item")?.parse()?,
                quantity: match extra {
                    Some(q) => q
                        .parse()
                        .with_context(|| format!("invalid quantity in '{s}'"))?,
                    None => 1,
                },
            },
            other => bail!("unknown step '{other}'"),
        };
        Ok(step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_step() {
        assert_eq!("status".parse::<Step>().unwrap(), Step::Status);
        assert_eq!("wait:1.5".parse::<Step>().unwrap(), Step::Wait { hours: 1.5 });
        assert_eq!("eat:1".parse::<Step>().unwrap(), Step::Eat(ItemRef::Id(1)));
        assert_eq!(
            "drink:water".parse::<Step>().unwrap(),
            Step::Drink(ItemRef::Name("water".into()))
        );
        assert_eq!("sleep:8".parse::<Step>().unwrap(), Step::Sleep { hours: 8 });
        assert_eq!(
            "wash:use_item:soap".parse::<Step>().unwrap(),
            Step::Wash {
                kind: "use_item".into(),
                item: Some(ItemRef::Name("soap".into()))
            }
        );
        assert_eq!(
            "medicine:cough_syrup".parse::<Step>().unwrap(),
            Step::Medicine(ItemRef::Name("cough syrup".into()))
        );
        assert_eq!(
            "give:1:3".parse::<Step>().unwrap(),
            Step::Give {
                item: ItemRef::Id(1),
                quantity: 3
            }
        );
    }

    #[test]
    fn rejects_malformed_steps() {
        assert!("dance".parse::<Step>().is_err());
        assert!("eat".parse::<Step>().is_err());
        assert!("wait:-2".parse::<Step>().is_err());
        assert!("sleep:long".parse::<Step>().is_err());
    }
}
