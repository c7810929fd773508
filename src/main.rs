use anyhow::Context;

fn main() -> anyhow::Result<()> {
    csx::run().context("csx failed")
}
