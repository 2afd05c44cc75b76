use anyhow::anyhow;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Filter values for the pool list. An absent or empty field places no
/// constraint on its dimension.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct FilterCriteria {
    pub algorithm: Option<String>,
    pub status: Option<String>,
    pub region: Option<String>,
    pub search: Option<String>,
}

/// Partial update of a [`FilterCriteria`]. `Some` replaces the field, an
/// empty string clears it and `None` leaves it untouched.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterUpdate {
    pub algorithm: Option<String>,
    pub status: Option<String>,
    pub region: Option<String>,
    pub search: Option<String>,
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn merge_field(target: &mut Option<String>, update: Option<String>) {
    if let Some(value) = update {
        *target = if value.is_empty() { None } else { Some(value) };
    }
}

impl FilterCriteria {
    pub fn algorithm(&self) -> Option<&str> {
        non_empty(self.algorithm.as_deref())
    }

    pub fn status(&self) -> Option<&str> {
        non_empty(self.status.as_deref())
    }

    pub fn region(&self) -> Option<&str> {
        non_empty(self.region.as_deref())
    }

    pub fn search(&self) -> Option<&str> {
        non_empty(self.search.as_deref())
    }

    pub fn is_empty(&self) -> bool {
        self.algorithm().is_none()
            && self.status().is_none()
            && self.region().is_none()
            && self.search().is_none()
    }

    pub fn merge(&mut self, update: FilterUpdate) {
        merge_field(&mut self.algorithm, update.algorithm);
        merge_field(&mut self.status, update.status);
        merge_field(&mut self.region, update.region);
        merge_field(&mut self.search, update.search);
    }

    pub fn with_algorithm(mut self, algorithm: impl Into<String>) -> Self {
        self.algorithm = Some(algorithm.into());
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    Id,
    Name,
    Algorithm,
    Url,
    Port,
    Fee,
    MinPayout,
    Hashrate,
    Workers,
    Uptime,
    LastBlock,
    Status,
    Region,
    Description,
}

impl SortKey {
    pub const ALL: [SortKey; 14] = [
        SortKey::Id,
        SortKey::Name,
        SortKey::Algorithm,
        SortKey::Url,
        SortKey::Port,
        SortKey::Fee,
        SortKey::MinPayout,
        SortKey::Hashrate,
        SortKey::Workers,
        SortKey::Uptime,
        SortKey::LastBlock,
        SortKey::Status,
        SortKey::Region,
        SortKey::Description,
    ];

    /// Field name as it appears in the pool JSON and the `sortBy` parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Id => "id",
            SortKey::Name => "name",
            SortKey::Algorithm => "algorithm",
            SortKey::Url => "url",
            SortKey::Port => "port",
            SortKey::Fee => "fee",
            SortKey::MinPayout => "minPayout",
            SortKey::Hashrate => "hashrate",
            SortKey::Workers => "workers",
            SortKey::Uptime => "uptime",
            SortKey::LastBlock => "lastBlock",
            SortKey::Status => "status",
            SortKey::Region => "region",
            SortKey::Description => "description",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::ALL
            .iter()
            .find(|key| key.as_str() == s)
            .copied()
            .ok_or_else(|| anyhow!("unknown sort key: {s}"))
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }

    pub fn reversed(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            _ => Err(anyhow!("invalid sort direction: {s}")),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct SortSpec {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    pub fn asc(key: SortKey) -> Self {
        Self::new(key, SortDirection::Asc)
    }

    pub fn desc(key: SortKey) -> Self {
        Self::new(key, SortDirection::Desc)
    }

    /// Sort that results from clicking `key` while `current` is active:
    /// the same key flips direction, any other key starts ascending.
    pub fn toggled(current: Option<&SortSpec>, key: SortKey) -> SortSpec {
        match current {
            Some(spec) if spec.key == key => SortSpec::new(key, spec.direction.reversed()),
            _ => SortSpec::asc(key),
        }
    }
}

/// Query string of `GET /api/pools`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PoolsQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub algorithm: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_direction: Option<String>,
}

impl PoolsQuery {
    /// Parse a raw query string. Repeated parameters keep their first value
    /// and unknown parameters are ignored, so parsing never fails.
    pub fn from_query_string(query: &str) -> Self {
        let mut parsed = PoolsQuery::default();
        for (name, value) in url::form_urlencoded::parse(query.as_bytes()) {
            let slot = match name.as_ref() {
                "algorithm" => &mut parsed.algorithm,
                "status" => &mut parsed.status,
                "region" => &mut parsed.region,
                "search" => &mut parsed.search,
                "sortBy" => &mut parsed.sort_by,
                "sortDirection" => &mut parsed.sort_direction,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into_owned());
            }
        }
        parsed
    }

    pub fn from_parts(criteria: &FilterCriteria, sort: Option<&SortSpec>) -> Self {
        Self {
            algorithm: criteria.algorithm().map(str::to_string),
            status: criteria.status().map(str::to_string),
            region: criteria.region().map(str::to_string),
            search: criteria.search().map(str::to_string),
            sort_by: sort.map(|s| s.key.as_str().to_string()),
            sort_direction: sort.map(|s| s.direction.as_str().to_string()),
        }
    }

    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            algorithm: non_empty(self.algorithm.as_deref()).map(str::to_string),
            status: non_empty(self.status.as_deref()).map(str::to_string),
            region: non_empty(self.region.as_deref()).map(str::to_string),
            search: non_empty(self.search.as_deref()).map(str::to_string),
        }
    }

    /// Sorting is only active when both `sortBy` and `sortDirection` are
    /// present and recognised.
    pub fn sort_spec(&self) -> Option<SortSpec> {
        let key = non_empty(self.sort_by.as_deref())?.parse().ok()?;
        let direction = non_empty(self.sort_direction.as_deref())?.parse().ok()?;
        Some(SortSpec::new(key, direction))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_replaces_only_given_fields() {
        let mut criteria = FilterCriteria::default()
            .with_algorithm("SHA-256")
            .with_region("Europe");

        criteria.merge(FilterUpdate {
            search: Some("zpool".to_string()),
            region: Some(String::new()),
            ..Default::default()
        });

        assert_eq!(criteria.algorithm(), Some("SHA-256"));
        assert_eq!(criteria.region(), None);
        assert_eq!(criteria.search(), Some("zpool"));
        assert_eq!(criteria.status(), None);
    }

    #[test]
    fn test_empty_strings_count_as_absent() {
        let criteria = FilterCriteria {
            algorithm: Some(String::new()),
            status: Some(String::new()),
            region: None,
            search: Some(String::new()),
        };
        assert!(criteria.is_empty());
        assert!(!criteria.with_status("active").is_empty());
    }

    #[test]
    fn test_sort_key_round_trips_field_names() {
        for key in SortKey::ALL {
            assert_eq!(key.as_str().parse::<SortKey>().unwrap(), key);
        }
        assert!("hashRate".parse::<SortKey>().is_err());
        assert_eq!(
            serde_json::to_string(&SortKey::MinPayout).unwrap(),
            "\"minPayout\""
        );
    }

    #[test]
    fn test_toggle_same_key_twice_returns_to_ascending() {
        let first = SortSpec::toggled(None, SortKey::Hashrate);
        assert_eq!(first.direction, SortDirection::Asc);

        let second = SortSpec::toggled(Some(&first), SortKey::Hashrate);
        assert_eq!(second.direction, SortDirection::Desc);

        let third = SortSpec::toggled(Some(&second), SortKey::Hashrate);
        assert_eq!(third, first);
    }

    #[test]
    fn test_toggle_new_key_starts_ascending() {
        let current = SortSpec::desc(SortKey::Fee);
        let next = SortSpec::toggled(Some(&current), SortKey::Name);
        assert_eq!(next, SortSpec::asc(SortKey::Name));
    }

    #[test]
    fn test_sort_requires_key_and_direction() {
        let only_key = PoolsQuery {
            sort_by: Some("hashrate".to_string()),
            ..Default::default()
        };
        assert_eq!(only_key.sort_spec(), None);

        let both = PoolsQuery {
            sort_by: Some("hashrate".to_string()),
            sort_direction: Some("desc".to_string()),
            ..Default::default()
        };
        assert_eq!(both.sort_spec(), Some(SortSpec::desc(SortKey::Hashrate)));

        let unknown_key = PoolsQuery {
            sort_by: Some("nope".to_string()),
            sort_direction: Some("asc".to_string()),
            ..Default::default()
        };
        assert_eq!(unknown_key.sort_spec(), None);
    }

    #[test]
    fn test_query_string_keeps_first_value() {
        let query = PoolsQuery::from_query_string(
            "search=asia+pool&status=active&status=inactive&sortBy=fee&page=2",
        );
        assert_eq!(query.search.as_deref(), Some("asia pool"));
        assert_eq!(query.status.as_deref(), Some("active"));
        assert_eq!(query.sort_by.as_deref(), Some("fee"));
        assert_eq!(query.sort_direction, None);
        assert_eq!(PoolsQuery::from_query_string(""), PoolsQuery::default());
    }

    #[test]
    fn test_query_from_parts_skips_empty_criteria() {
        let criteria = FilterCriteria::default()
            .with_status("active")
            .with_search("");
        let query = PoolsQuery::from_parts(&criteria, Some(&SortSpec::desc(SortKey::Uptime)));

        assert_eq!(query.status.as_deref(), Some("active"));
        assert_eq!(query.search, None);
        assert_eq!(query.sort_by.as_deref(), Some("uptime"));
        assert_eq!(query.sort_direction.as_deref(), Some("desc"));
        assert_eq!(query.criteria(), FilterCriteria::default().with_status("active"));
    }
}
