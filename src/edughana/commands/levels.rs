use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::ContentProvider;

pub fn run<P: ContentProvider>(provider: &P) -> Result<CmdResult> {
    let levels = provider.educational_levels()?;
    Ok(CmdResult::default().with_levels(levels))
}
