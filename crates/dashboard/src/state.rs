use log::debug;
use shared::fixtures::mock_pools;
use shared::models::pool::PoolRecord;
use shared::models::query::{FilterCriteria, FilterUpdate, SortKey, SortSpec};
use shared::query;

/// Dashboard state owned by the presentation layer.
///
/// Mutators only record the new filter or sort. The derived list changes
/// when [`PoolsStore::apply_filters_and_sort`] runs, which callers trigger
/// after each filter or sort change. `reset_filters` is the exception and
/// recomputes immediately.
#[derive(Debug, Clone)]
pub struct PoolsStore {
    pools: Vec<PoolRecord>,
    filtered_pools: Vec<PoolRecord>,
    filters: FilterCriteria,
    sort: Option<SortSpec>,
    selected_pool: Option<PoolRecord>,
    is_loading: bool,
    error: Option<String>,
}

impl PoolsStore {
    pub fn new(pools: Vec<PoolRecord>) -> Self {
        Self {
            filtered_pools: pools.clone(),
            pools,
            filters: FilterCriteria::default(),
            sort: None,
            selected_pool: None,
            is_loading: false,
            error: None,
        }
    }

    pub fn with_mock_pools() -> Self {
        Self::new(mock_pools())
    }

    pub fn pools(&self) -> &[PoolRecord] {
        &self.pools
    }

    pub fn filtered_pools(&self) -> &[PoolRecord] {
        &self.filtered_pools
    }

    pub fn filters(&self) -> &FilterCriteria {
        &self.filters
    }

    pub fn sort(&self) -> Option<&SortSpec> {
        self.sort.as_ref()
    }

    pub fn selected_pool(&self) -> Option<&PoolRecord> {
        self.selected_pool.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Replace the snapshot the derived list is computed from.
    pub fn set_pools(&mut self, pools: Vec<PoolRecord>) {
        self.pools = pools;
    }

    pub fn set_filters(&mut self, update: FilterUpdate) {
        self.filters.merge(update);
    }

    pub fn set_sort(&mut self, sort: Option<SortSpec>) {
        self.sort = sort;
    }

    pub fn toggle_sort(&mut self, key: SortKey) {
        self.sort = Some(SortSpec::toggled(self.sort.as_ref(), key));
    }

    pub fn select(&mut self, pool: PoolRecord) {
        self.selected_pool = Some(pool);
    }

    pub fn deselect(&mut self) {
        self.selected_pool = None;
    }

    pub fn set_loading(&mut self, is_loading: bool) {
        self.is_loading = is_loading;
    }

    pub fn set_error(&mut self, error: Option<String>) {
        self.error = error;
    }

    pub fn apply_filters_and_sort(&mut self) {
        self.filtered_pools = query::apply(&self.pools, &self.filters, self.sort.as_ref());
        debug!(
            "Derived {} of {} pools (filters: {:?}, sort: {:?})",
            self.filtered_pools.len(),
            self.pools.len(),
            self.filters,
            self.sort
        );
    }

    pub fn reset_filters(&mut self) {
        self.filters = FilterCriteria::default();
        self.sort = None;
        self.apply_filters_and_sort();
    }
}

impl Default for PoolsStore {
    fn default() -> Self {
        Self::with_mock_pools()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::query::SortDirection;

    fn ids(pools: &[PoolRecord]) -> Vec<&str> {
        pools.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_starts_with_full_list() {
        let store = PoolsStore::with_mock_pools();
        assert_eq!(store.filtered_pools(), mock_pools().as_slice());
        assert!(store.filters().is_empty());
        assert!(store.sort().is_none());
        assert!(!store.is_loading());
        assert!(store.error().is_none());
    }

    #[test]
    fn test_filters_apply_only_on_recompute() {
        let mut store = PoolsStore::with_mock_pools();
        store.set_filters(FilterUpdate {
            status: Some("active".to_string()),
            ..Default::default()
        });
        assert_eq!(store.filtered_pools().len(), mock_pools().len());

        store.apply_filters_and_sort();
        assert!(store.filtered_pools().iter().all(|p| p.is_active()));
        assert!(store.filtered_pools().len() < mock_pools().len());
    }

    #[test]
    fn test_partial_filter_updates_merge() {
        let mut store = PoolsStore::with_mock_pools();
        store.set_filters(FilterUpdate {
            algorithm: Some("SHA-256".to_string()),
            ..Default::default()
        });
        store.set_filters(FilterUpdate {
            region: Some("Asia".to_string()),
            ..Default::default()
        });
        store.apply_filters_and_sort();

        assert_eq!(store.filters().algorithm(), Some("SHA-256"));
        assert_eq!(store.filters().region(), Some("Asia"));
        assert!(store
            .filtered_pools()
            .iter()
            .all(|p| p.algorithm == "SHA-256" && p.region == "Asia"));
    }

    #[test]
    fn test_toggle_sort_cycles_direction() {
        let mut store = PoolsStore::with_mock_pools();
        store.toggle_sort(SortKey::Hashrate);
        assert_eq!(store.sort().map(|s| s.direction), Some(SortDirection::Asc));
        store.toggle_sort(SortKey::Hashrate);
        assert_eq!(store.sort().map(|s| s.direction), Some(SortDirection::Desc));
        store.toggle_sort(SortKey::Hashrate);
        assert_eq!(store.sort().map(|s| s.direction), Some(SortDirection::Asc));

        store.toggle_sort(SortKey::Hashrate);
        store.toggle_sort(SortKey::Name);
        assert_eq!(store.sort(), Some(&SortSpec::asc(SortKey::Name)));
    }

    #[test]
    fn test_sort_matches_shared_engine() {
        let mut store = PoolsStore::with_mock_pools();
        store.set_sort(Some(SortSpec::desc(SortKey::Uptime)));
        store.apply_filters_and_sort();

        let expected = query::apply(
            &mock_pools(),
            &FilterCriteria::default(),
            Some(&SortSpec::desc(SortKey::Uptime)),
        );
        assert_eq!(ids(store.filtered_pools()), ids(&expected));
    }

    #[test]
    fn test_reset_clears_filters_sort_and_recomputes() {
        let mut store = PoolsStore::with_mock_pools();
        store.set_filters(FilterUpdate {
            search: Some("pool".to_string()),
            ..Default::default()
        });
        store.set_sort(Some(SortSpec::asc(SortKey::Fee)));
        store.apply_filters_and_sort();
        assert_ne!(store.filtered_pools(), mock_pools().as_slice());

        store.reset_filters();
        assert!(store.filters().is_empty());
        assert!(store.sort().is_none());
        assert_eq!(store.filtered_pools(), mock_pools().as_slice());
    }

    #[test]
    fn test_selection_is_independent_of_query() {
        let mut store = PoolsStore::with_mock_pools();
        let pool = store.pools()[3].clone();
        store.select(pool.clone());
        store.set_filters(FilterUpdate {
            region: Some("Nowhere".to_string()),
            ..Default::default()
        });
        store.apply_filters_and_sort();

        assert!(store.filtered_pools().is_empty());
        assert_eq!(store.selected_pool(), Some(&pool));
        store.deselect();
        assert!(store.selected_pool().is_none());
    }

    #[test]
    fn test_set_pools_replaces_snapshot() {
        let mut store = PoolsStore::with_mock_pools();
        store.set_pools(mock_pools().into_iter().take(2).collect());
        store.set_loading(true);
        store.set_error(Some("Failed to fetch pools".to_string()));
        store.apply_filters_and_sort();

        assert_eq!(store.filtered_pools().len(), 2);
        assert!(store.is_loading());
        assert_eq!(store.error(), Some("Failed to fetch pools"));
    }
}
