use miette::Result;

use biospack_ops::ops_releases;

pub fn exec() -> Result<()> {
    let config = super::load_config()?;
    for line in ops_releases::list_releases(&config) {
        println!("{line}");
    }
    Ok(())
}
