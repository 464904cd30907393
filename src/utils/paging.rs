//! Pagination helpers for paged listing endpoints.

use actix_web::http::header::ETag;
use actix_web::HttpResponse;
use serde::Serialize;
use std::hash::Hash;

use crate::constants::{HEADER_TOTAL_COUNT, QUERY_PAGE, QUERY_PAGE_SIZE};
use crate::errors::ApiError;
use crate::models::{Page, Pager};
use crate::utils::entity_tag;

/// Build a [`Pager`] from the query parameters of a request.
///
/// Only the first occurrence of `page` and `pageSize` is considered. Absent
/// parameters keep their defaults; values that are not integers fail with
/// [`ApiError::InvalidArgument`].
///
/// # Example
/// ```ignore
/// let pager = extract_pager(&query)?;
/// ```
pub fn extract_pager(query_params: &[(String, String)]) -> Result<Pager, ApiError> {
    let defaults = Pager::default();

    let page = match first_value(query_params, QUERY_PAGE) {
        Some(value) => parse_int(QUERY_PAGE, value)?,
        None => defaults.page,
    };
    let items_per_page = match first_value(query_params, QUERY_PAGE_SIZE) {
        Some(value) => parse_int(QUERY_PAGE_SIZE, value)?,
        None => defaults.items_per_page,
    };

    Ok(Pager::new(page, items_per_page))
}

/// Build the response for one page of results.
///
/// An empty page yields `204 No Content` without body or paging headers.
/// Otherwise the items are returned as JSON with an `ETag` fingerprint of the
/// page and a `TotalCount` header.
pub fn response_builder<T: Serialize + Hash>(page: &Page<T>) -> HttpResponse {
    if page.is_empty() {
        return HttpResponse::NoContent().finish();
    }

    HttpResponse::Ok()
        .insert_header(ETag(entity_tag(page)))
        .insert_header((HEADER_TOTAL_COUNT, page.total_count.to_string()))
        .json(&page.items)
}

fn first_value<'a>(query_params: &'a [(String, String)], name: &str) -> Option<&'a str> {
    query_params
        .iter()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.as_str())
}

fn parse_int(name: &str, value: &str) -> Result<i32, ApiError> {
    value.parse::<i32>().map_err(|_| {
        ApiError::InvalidArgument(format!("{} expects an int but found [{}]", name, value))
    })
}
