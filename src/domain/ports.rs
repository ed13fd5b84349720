/// A pipeline stage the driver can run: data ingestion, base model
/// preparation, training, evaluation.
pub trait Stage {
    fn name(&self) -> &str;
    fn run(&self) -> anyhow::Result<()>;
}
