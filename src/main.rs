use miette::Result;

/// Main entry point for the bd CLI tool
fn main() -> Result<()> {
    miette::set_panic_hook();

    builddepends::run()
}
