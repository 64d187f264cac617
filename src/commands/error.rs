/// Centralized error mapping for commands.
///
/// Single place to change once commands return structured errors.
pub fn map_err(err: anyhow::Error) -> String {
    format!("{err:#}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn map_err_keeps_context_chain() {
        let err = Err::<(), _>(std::io::Error::other("disk gone"))
            .context("Failed to read document")
            .unwrap_err();
        assert_eq!(map_err(err), "Failed to read document: disk gone");
    }
}
