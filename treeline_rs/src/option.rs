//! Option descriptors, the alias lookup table, and the token binder.
//!
//! Declarations (`Opt`) are immutable once a table is built; every bind pass
//! allocates fresh accumulation state (`OptionValues`), so a single command
//! tree can be re-parsed concurrently without shared mutable descriptors.

use std::collections::HashMap;

use crate::error::{CliError, Result};
use crate::parse::ParseValue;

/// Index of the implicit help flag, always registered first.
const HELP: usize = 0;

/// Arity and value handling for one declared option.
#[derive(Debug, Clone)]
pub enum OptKind {
    /// Consumes no value tokens.
    Flag,
    /// Consumes exactly one value token; later occurrences overwrite.
    Single {
        value_name: String,
        default: Option<String>,
    },
    /// Appends one element per occurrence, or splits each consumed value
    /// on the configured delimiter.
    Multi {
        value_name: String,
        delimiter: Option<String>,
        discard_empty: bool,
    },
}

/// One declared switch: aliases, help text, and arity.
#[derive(Debug, Clone)]
pub struct Opt {
    aliases: Vec<String>,
    description: String,
    kind: OptKind,
}

impl Opt {
    fn new(aliases: &[&str], description: &str, kind: OptKind) -> Self {
        assert!(!aliases.is_empty(), "option declared without aliases");
        for alias in aliases {
            assert!(!alias.is_empty(), "option declared with an empty alias");
        }

        Self {
            aliases: aliases.iter().map(|alias| alias.to_string()).collect(),
            description: description.to_string(),
            kind,
        }
    }

    /// A no-value flag.
    pub fn flag(aliases: &[&str], description: &str) -> Self {
        Self::new(aliases, description, OptKind::Flag)
    }

    /// A single-value option. `value_name` is the placeholder shown in help.
    pub fn single(aliases: &[&str], description: &str, value_name: &str) -> Self {
        Self::new(
            aliases,
            description,
            OptKind::Single {
                value_name: value_name.to_string(),
                default: None,
            },
        )
    }

    /// A list option. Without a delimiter, each occurrence appends one element.
    pub fn multi(aliases: &[&str], description: &str, value_name: &str) -> Self {
        Self::new(
            aliases,
            description,
            OptKind::Multi {
                value_name: value_name.to_string(),
                delimiter: None,
                discard_empty: true,
            },
        )
    }

    /// Raw default token, parsed on read exactly like a supplied value.
    pub fn default_value(mut self, raw: &str) -> Self {
        match &mut self.kind {
            OptKind::Single { default, .. } => *default = Some(raw.to_string()),
            _ => panic!("default_value only applies to single-value options"),
        }
        self
    }

    /// Split consumed values on `separator`, dropping empty segments.
    pub fn delimiter(mut self, separator: &str) -> Self {
        match &mut self.kind {
            OptKind::Multi { delimiter, .. } => *delimiter = Some(separator.to_string()),
            _ => panic!("delimiter only applies to multi-value options"),
        }
        self
    }

    /// Keep empty segments produced by delimiter splitting.
    pub fn keep_empty(mut self) -> Self {
        match &mut self.kind {
            OptKind::Multi { discard_empty, .. } => *discard_empty = false,
            _ => panic!("keep_empty only applies to multi-value options"),
        }
        self
    }

    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn kind(&self) -> &OptKind {
        &self.kind
    }

    /// Help placeholder for value-bearing kinds.
    pub fn value_name(&self) -> Option<&str> {
        match &self.kind {
            OptKind::Flag => None,
            OptKind::Single { value_name, .. } | OptKind::Multi { value_name, .. } => {
                Some(value_name)
            }
        }
    }
}

/// Alias lookup built once per command from its declared options plus the
/// implicit help flag.
#[derive(Debug)]
pub struct OptionTable {
    opts: Vec<Opt>,
    lookup: HashMap<String, usize>,
}

impl OptionTable {
    /// Indexes every alias of every descriptor. Duplicate aliases are a
    /// programmer error and panic; `help` and `?` are always reserved.
    pub fn new(declared: Vec<Opt>) -> Self {
        let mut table = Self {
            opts: Vec::with_capacity(declared.len() + 1),
            lookup: HashMap::new(),
        };

        table.register(Opt::flag(&["help", "?"], "Print information about a command"));
        for opt in declared {
            table.register(opt);
        }

        table
    }

    fn register(&mut self, opt: Opt) {
        let index = self.opts.len();
        for alias in opt.aliases() {
            if self.lookup.insert(alias.clone(), index).is_some() {
                panic!("duplicate option alias: {alias}");
            }
        }
        self.opts.push(opt);
    }

    fn index(&self, alias: &str) -> Result<usize> {
        self.lookup
            .get(alias)
            .copied()
            .ok_or_else(|| CliError::UnknownOption(alias.to_string()))
    }

    /// Resolves an alias to its descriptor.
    pub fn resolve(&self, alias: &str) -> Result<&Opt> {
        self.index(alias).map(|index| &self.opts[index])
    }

    /// Declared options, without the implicit help flag.
    pub fn declared(&self) -> &[Opt] {
        &self.opts[HELP + 1..]
    }

    /// The implicit help descriptor.
    pub fn help_opt(&self) -> &Opt {
        &self.opts[HELP]
    }

    fn apply_value(&self, cells: &mut [Cell], index: usize, raw: &str) {
        match (&self.opts[index].kind, &mut cells[index]) {
            (OptKind::Single { .. }, Cell::Single(slot)) => *slot = Some(raw.to_string()),
            (
                OptKind::Multi {
                    delimiter,
                    discard_empty,
                    ..
                },
                Cell::Multi(values),
            ) => match delimiter {
                None => values.push(raw.to_string()),
                Some(separator) => {
                    for segment in raw.split(separator.as_str()) {
                        if *discard_empty && segment.is_empty() {
                            continue;
                        }
                        values.push(segment.to_string());
                    }
                }
            },
            _ => unreachable!("cells are allocated from the descriptor kinds"),
        }
    }

    /// Walks the token stream left to right, classifying each token and
    /// consuming values per descriptor arity. Returns fresh accumulation
    /// state plus the positional candidates in original order.
    pub fn bind(&self, tokens: &[String]) -> Result<(OptionValues<'_>, Vec<String>)> {
        let mut cells: Vec<Cell> = self.opts.iter().map(|opt| Cell::fresh(&opt.kind)).collect();
        let mut positional = Vec::new();
        let mut stream = tokens.iter();

        while let Some(token) = stream.next() {
            if token == "--" {
                // End of options; everything that follows is positional.
                positional.extend(stream.by_ref().cloned());
                break;
            } else if token == "-" {
                positional.push(token.clone());
            } else if let Some(body) = token.strip_prefix("--") {
                match body.split_once('=') {
                    Some((alias, inline)) => {
                        let index = self.index(alias)?;
                        if matches!(self.opts[index].kind, OptKind::Flag) {
                            return Err(CliError::UnexpectedValue(alias.to_string()));
                        }
                        if inline.is_empty() {
                            return Err(CliError::MissingValue(alias.to_string()));
                        }
                        self.apply_value(&mut cells, index, inline);
                    }
                    None => {
                        let index = self.index(body)?;
                        if matches!(self.opts[index].kind, OptKind::Flag) {
                            cells[index] = Cell::Flag(true);
                        } else {
                            // The next stream token is the value, even if it
                            // begins with a dash.
                            let Some(value) = stream.next() else {
                                return Err(CliError::MissingValue(body.to_string()));
                            };
                            self.apply_value(&mut cells, index, value);
                        }
                    }
                }
            } else if let Some(cluster) = token.strip_prefix('-') {
                let mut chars = cluster.chars().peekable();

                while let Some(ch) = chars.next() {
                    let alias = ch.to_string();
                    let index = self.index(&alias)?;

                    if matches!(self.opts[index].kind, OptKind::Flag) {
                        cells[index] = Cell::Flag(true);
                        continue;
                    }

                    // A value-bearing short option must be last in the
                    // cluster and have a following stream token.
                    if chars.peek().is_some() {
                        return Err(CliError::MissingValue(alias));
                    }
                    let Some(value) = stream.next() else {
                        return Err(CliError::MissingValue(alias));
                    };
                    self.apply_value(&mut cells, index, value);
                }
            } else {
                positional.push(token.clone());
            }
        }

        Ok((OptionValues { table: self, cells }, positional))
    }
}

#[derive(Debug)]
enum Cell {
    Flag(bool),
    Single(Option<String>),
    Multi(Vec<String>),
}

impl Cell {
    fn fresh(kind: &OptKind) -> Self {
        match kind {
            OptKind::Flag => Cell::Flag(false),
            OptKind::Single { .. } => Cell::Single(None),
            OptKind::Multi { .. } => Cell::Multi(Vec::new()),
        }
    }
}

/// Per-invocation accumulation state produced by [`OptionTable::bind`].
///
/// Accessors take any alias of the option. Asking for an undeclared alias or
/// using the wrong accessor kind is a programmer error and panics; value
/// conversion failures surface as [`CliError`].
#[derive(Debug)]
pub struct OptionValues<'a> {
    table: &'a OptionTable,
    cells: Vec<Cell>,
}

impl OptionValues<'_> {
    fn cell(&self, alias: &str) -> (&Opt, &Cell) {
        let index = self
            .table
            .index(alias)
            .unwrap_or_else(|_| panic!("option '{alias}' is not declared"));
        (&self.table.opts[index], &self.cells[index])
    }

    /// Whether the implicit help flag was selected.
    pub fn help(&self) -> bool {
        matches!(self.cells[HELP], Cell::Flag(true))
    }

    /// Whether a no-value flag was selected.
    pub fn flag(&self, alias: &str) -> bool {
        match self.cell(alias) {
            (_, Cell::Flag(selected)) => *selected,
            _ => panic!("option '{alias}' is not a flag"),
        }
    }

    /// The value of a single-value option, falling back to its declared
    /// default. The default goes through the same parser as a supplied token.
    pub fn value<T: ParseValue>(&self, alias: &str) -> Result<Option<T>> {
        match self.cell(alias) {
            (opt, Cell::Single(supplied)) => {
                let raw = match supplied {
                    Some(raw) => Some(raw.as_str()),
                    None => match &opt.kind {
                        OptKind::Single { default, .. } => default.as_deref(),
                        _ => unreachable!("cell kind matches descriptor kind"),
                    },
                };
                raw.map(T::parse_value).transpose()
            }
            _ => panic!("option '{alias}' is not a single-value option"),
        }
    }

    /// All accumulated elements of a list option, in consumption order.
    pub fn values<T: ParseValue>(&self, alias: &str) -> Result<Vec<T>> {
        match self.cell(alias) {
            (_, Cell::Multi(raw)) => raw.iter().map(|item| T::parse_value(item)).collect(),
            _ => panic!("option '{alias}' is not a multi-value option"),
        }
    }
}
