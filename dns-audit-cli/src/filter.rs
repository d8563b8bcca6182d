//! Name filters for accounts and zones

/// Decide whether `name` passes both filter sources.
///
/// `env_filters` entries must already be lowercase; at least one has to be a
/// substring of the lowercased name. `cli_filter` is compared
/// case-insensitively and an empty value counts as absent. A missing source
/// always passes.
pub fn should_include(
    name: &str,
    env_filters: Option<&[String]>,
    cli_filter: Option<&str>,
) -> bool {
    let name = name.to_lowercase();

    if let Some(filters) = env_filters
        && !filters.iter().any(|f| name.contains(f.as_str()))
    {
        return false;
    }

    if let Some(cli) = cli_filter
        && !cli.is_empty()
        && !name.contains(&cli.to_lowercase())
    {
        return false;
    }

    true
}

/// The two filter sources for one level of the hierarchy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameFilter {
    env: Option<Vec<String>>,
    cli: Option<String>,
}

impl NameFilter {
    pub fn new(env: Option<Vec<String>>, cli: Option<String>) -> Self {
        Self {
            env: env.map(|entries| entries.iter().map(|e| e.to_lowercase()).collect()),
            cli,
        }
    }

    pub fn matches(&self, name: &str) -> bool {
        should_include(name, self.env.as_deref(), self.cli.as_deref())
    }
}
