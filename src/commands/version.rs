use anyhow::Result;

pub fn execute() -> Result<()> {
    println!("syshealth version {}", env!("CARGO_PKG_VERSION"));
    Ok(())
}
