use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::ContentProvider;

pub fn run<P: ContentProvider>(provider: &P) -> Result<CmdResult> {
    let subjects = provider.subjects()?;
    Ok(CmdResult::default().with_subjects(subjects))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemoryProvider;

    #[test]
    fn lists_all_subjects() {
        let provider = MemoryProvider::seeded();
        let result = run(&provider).unwrap();
        assert!(result.subjects.iter().any(|s| s.name == "Mathematics"));
        assert_eq!(result.subjects.len(), 5);
    }
}
