use anyhow::Result;

/// A config section that can normalise itself after parsing and then check its values.
pub(crate) trait ConfigEntity {
    fn finalize(&mut self) -> Result<()>;
    fn validate(&self) -> Result<()>;
}
