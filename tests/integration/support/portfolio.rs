use folio::portfolio::Portfolio;

/// Built-in dataset minus the named projects.
pub fn portfolio_without(project_ids: &[&str]) -> Portfolio {
    let mut portfolio = Portfolio::builtin().clone();
    portfolio
        .projects
        .retain(|project| !project_ids.contains(&project.id.as_str()));
    portfolio
}

pub fn project_titles(portfolio: &Portfolio) -> Vec<&str> {
    portfolio
        .projects
        .iter()
        .map(|project| project.title.as_str())
        .collect()
}

/// Number of non-overlapping occurrences of `needle` in `haystack`.
pub fn occurrences(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}
