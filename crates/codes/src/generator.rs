use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// The entity kinds that carry generated codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Client,
    Project,
    Timesheet,
    Invoice,
    Expense,
}

/// How a kind's sequence is scoped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeriodScope {
    /// One global sequence for the lifetime of the dataset.
    Global,
    /// Sequence restarts every calendar year.
    Yearly,
    /// Sequence restarts every calendar month.
    Monthly,
}

impl EntityKind {
    pub fn prefix(self) -> &'static str {
        match self {
            EntityKind::Client => "CLT",
            EntityKind::Project => "PRJ",
            EntityKind::Timesheet => "TMS",
            EntityKind::Invoice => "INV",
            EntityKind::Expense => "EXP",
        }
    }

    pub fn scope(self) -> PeriodScope {
        match self {
            EntityKind::Client | EntityKind::Project => PeriodScope::Global,
            EntityKind::Invoice => PeriodScope::Yearly,
            EntityKind::Timesheet | EntityKind::Expense => PeriodScope::Monthly,
        }
    }
}

/// The generation period (calendar year + month) for period-scoped kinds.
///
/// Always supplied by the caller; the generator never reads the clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    pub year: i32,
    pub month: u32,
}

impl Period {
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }
}

/// Generate the next code for `kind` given the complete set of existing codes.
///
/// The sequence is `max(parsed sequence numbers) + 1` over the codes matching
/// this kind's (and, for period-scoped kinds, this period's) prefix, starting
/// at 1 when none match. Codes of other kinds or periods are ignored;
/// malformed sequence suffixes are skipped with a warning rather than
/// aborting generation.
///
/// Deterministic: the same inputs always yield the same code. Uniqueness is
/// only as good as the snapshot passed in (see crate docs).
pub fn next_code<'a, I>(kind: EntityKind, existing: I, period: Period) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let prefix = match kind.scope() {
        PeriodScope::Global => format!("{}-", kind.prefix()),
        PeriodScope::Yearly => format!("{}-{:04}-", kind.prefix(), period.year),
        PeriodScope::Monthly => {
            format!("{}-{:04}{:02}-", kind.prefix(), period.year, period.month)
        }
    };

    let max_seq = existing
        .into_iter()
        .filter_map(|code| parse_sequence(code, &prefix))
        .max()
        .unwrap_or(0);

    format!("{prefix}{:04}", max_seq + 1)
}

/// Extract the running sequence from `code` if it belongs to `prefix`.
fn parse_sequence(code: &str, prefix: &str) -> Option<u32> {
    let suffix = code.strip_prefix(prefix)?;
    match suffix.parse::<u32>() {
        Ok(seq) => Some(seq),
        Err(_) => {
            tracing::warn!(code, "skipping malformed entity code");
            None
        }
    }
}
