//! Embedded default symbol inventory. Validated by build.rs and again,
//! structurally, when the global table is first built.

pub(crate) const DEFAULT_TOML: &str = include_str!("nst_sampa.toml");
