use crate::core::helpers::value_key;
use crate::core::rest::RestApi;
use crate::domain::model::Record;
use crate::utils::error::{CatalogError, Result};
use serde_json::Value;
use std::collections::HashSet;

impl RestApi {
    /// Follows `next` cursors from `start_url`, keeping records whose
    /// `search_key` value is in `match_set`.
    ///
    /// Bounded by the configured page budget; a cursor that points back at an
    /// already visited page is an error.
    pub async fn get_all_results(
        &self,
        start_url: &str,
        search_key: &str,
        match_set: &[Value],
    ) -> Result<Vec<Record>> {
        let wanted: HashSet<String> = match_set.iter().map(value_key).collect();
        let mut visited = HashSet::new();
        let mut results = Vec::new();
        let mut url = start_url.to_string();
        let mut pages = 0usize;

        loop {
            if let Some(limit) = self.max_pages {
                if pages >= limit {
                    return Err(CatalogError::PaginationLimitExceeded {
                        url: start_url.to_string(),
                        pages: limit,
                    });
                }
            }

            let page = self.fetch_page(&url).await?;
            pages += 1;
            visited.insert(url);

            let next_url = page.next_cursor().map(|next| self.resolve(next));
            let fetched = page.data.len();
            for record in page.data {
                if wanted.contains(&value_key(record.field(search_key)?)) {
                    results.push(record);
                }
            }
            tracing::debug!("Page {}: {} rows, {} matching so far", pages, fetched, results.len());

            match next_url {
                None => break,
                Some(next) if visited.contains(&next) => {
                    return Err(CatalogError::PaginationCycle { url: next });
                }
                Some(next) => url = next,
            }
        }

        tracing::debug!("Fetched {} pages from {}, {} matching records", pages, start_url, results.len());
        Ok(results)
    }
}
