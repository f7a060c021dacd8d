//! Positional argument slots and the binder that distributes candidates
//! across them.
//!
//! Slots are bound left to right. When the variadic slot is reached, the
//! slots after it are resolved first, in reverse against the candidate tail,
//! so the variadic slot only claims whatever remains in the middle.

use std::collections::{HashSet, VecDeque};

use crate::error::{CliError, Result};
use crate::parse::ParseValue;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgKind {
    Required,
    Optional,
    Variadic,
}

/// One declared positional parameter.
#[derive(Debug, Clone)]
pub struct ArgSpec {
    name: String,
    kind: ArgKind,
}

impl ArgSpec {
    pub fn required(name: &str) -> Self {
        Self {
            name: name.to_string(),
            kind: ArgKind::Required,
        }
    }

    pub fn optional(name: &str) -> Self {
        Self {
            name: name.to_string(),
            kind: ArgKind::Optional,
        }
    }

    pub fn variadic(name: &str) -> Self {
        Self {
            name: name.to_string(),
            kind: ArgKind::Variadic,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ArgKind {
        self.kind
    }
}

/// Declaration-time validation: duplicate names and a second variadic slot
/// are programmer errors.
pub(crate) fn validate_slots(command: &str, slots: &[ArgSpec]) {
    let mut names = HashSet::new();
    let mut variadic = 0;

    for slot in slots {
        if !names.insert(slot.name()) {
            panic!("command '{command}' declares argument '{}' twice", slot.name());
        }
        if slot.kind() == ArgKind::Variadic {
            variadic += 1;
            if variadic > 1 {
                panic!("command '{command}' declares more than one variadic argument");
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum ArgValue {
    One(String),
    Maybe(Option<String>),
    Many(Vec<String>),
}

#[derive(Debug)]
struct BoundArg {
    name: String,
    value: ArgValue,
}

/// Typed values bound per invocation, one per slot in declaration order.
///
/// Accessors panic on an undeclared name or a kind mismatch (programmer
/// errors); conversion failures surface as [`CliError`].
#[derive(Debug)]
pub struct ArgumentValues {
    slots: Vec<BoundArg>,
}

impl ArgumentValues {
    fn get(&self, name: &str) -> &ArgValue {
        self.slots
            .iter()
            .find(|slot| slot.name == name)
            .map(|slot| &slot.value)
            .unwrap_or_else(|| panic!("argument '{name}' is not declared"))
    }

    pub fn required<T: ParseValue>(&self, name: &str) -> Result<T> {
        match self.get(name) {
            ArgValue::One(raw) => T::parse_value(raw),
            _ => panic!("argument '{name}' is not a required slot"),
        }
    }

    pub fn optional<T: ParseValue>(&self, name: &str) -> Result<Option<T>> {
        match self.get(name) {
            ArgValue::Maybe(raw) => raw.as_deref().map(T::parse_value).transpose(),
            _ => panic!("argument '{name}' is not an optional slot"),
        }
    }

    pub fn variadic<T: ParseValue>(&self, name: &str) -> Result<Vec<T>> {
        match self.get(name) {
            ArgValue::Many(raw) => raw.iter().map(|item| T::parse_value(item)).collect(),
            _ => panic!("argument '{name}' is not a variadic slot"),
        }
    }
}

/// Distributes the positional candidates across the declared slots.
pub fn bind_args(slots: &[ArgSpec], candidates: Vec<String>) -> Result<ArgumentValues> {
    let mut pool: VecDeque<String> = candidates.into();
    let mut bound: Vec<Option<ArgValue>> = slots.iter().map(|_| None).collect();

    let mut index = 0;
    while index < slots.len() {
        match slots[index].kind() {
            ArgKind::Required => {
                let value = pool.pop_front().ok_or_else(|| {
                    CliError::MissingArgument(slots[index].name().to_string())
                })?;
                bound[index] = Some(ArgValue::One(value));
            }
            ArgKind::Optional => {
                bound[index] = Some(ArgValue::Maybe(pool.pop_front()));
            }
            ArgKind::Variadic => {
                // Slots after the variadic one claim candidates from the
                // tail first; the variadic slot absorbs the middle.
                let mut tail = slots.len();
                while tail > index + 1 {
                    tail -= 1;
                    match slots[tail].kind() {
                        ArgKind::Required => {
                            let value = pool.pop_back().ok_or_else(|| {
                                CliError::MissingArgument(slots[tail].name().to_string())
                            })?;
                            bound[tail] = Some(ArgValue::One(value));
                        }
                        ArgKind::Optional => {
                            bound[tail] = Some(ArgValue::Maybe(pool.pop_back()));
                        }
                        ArgKind::Variadic => {
                            unreachable!("at most one variadic slot per command")
                        }
                    }
                }

                bound[index] = Some(ArgValue::Many(pool.drain(..).collect()));
                break;
            }
        }
        index += 1;
    }

    if !pool.is_empty() {
        return Err(CliError::TooManyArguments);
    }

    let slots = slots
        .iter()
        .zip(bound)
        .map(|(slot, value)| BoundArg {
            name: slot.name().to_string(),
            value: value.unwrap_or_else(|| unreachable!("every slot is bound")),
        })
        .collect();

    Ok(ArgumentValues { slots })
}
