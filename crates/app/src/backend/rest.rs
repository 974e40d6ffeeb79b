//! REST data endpoints.

use std::fmt::Display;

use reqwest::Method;
use serde::{Serialize, de::DeserializeOwned};

use crate::backend::{AccessToken, BackendClient, BackendError};

/// Sort direction for [`Query::order`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    /// Smallest first.
    Ascending,

    /// Largest first.
    Descending,
}

impl Order {
    fn as_str(self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }
}

/// A table query: filters, ordering and limits as REST query parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    table: String,
    params: Vec<(String, String)>,
}

impl Query {
    /// Query over `name`.
    pub fn table(name: impl Into<String>) -> Self {
        Self {
            table: name.into(),
            params: Vec::new(),
        }
    }

    /// Columns to return, comma separated.
    #[must_use]
    pub fn select(self, columns: &str) -> Self {
        self.param("select", columns)
    }

    /// Keep rows where `column` equals `value`.
    #[must_use]
    pub fn eq(self, column: &str, value: impl Display) -> Self {
        self.param(column, format!("eq.{value}"))
    }

    /// Keep rows where `column` is one of `values`.
    #[must_use]
    pub fn in_list<I>(self, column: &str, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Display,
    {
        let values: Vec<String> = values.into_iter().map(|value| value.to_string()).collect();

        self.param(column, format!("in.({})", values.join(",")))
    }

    /// Sort by `column`.
    #[must_use]
    pub fn order(self, column: &str, order: Order) -> Self {
        self.param("order", format!("{column}.{}", order.as_str()))
    }

    /// Return at most `limit` rows.
    #[must_use]
    pub fn limit(self, limit: usize) -> Self {
        self.param("limit", limit.to_string())
    }

    /// Conflict target used by upserts.
    #[must_use]
    pub fn on_conflict(self, column: &str) -> Self {
        self.param("on_conflict", column)
    }

    /// Query parameters in insertion order.
    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }

    /// Request path relative to the backend URL.
    pub fn path(&self) -> String {
        format!("rest/v1/{}", self.table)
    }

    fn param(mut self, key: &str, value: impl Into<String>) -> Self {
        self.params.push((key.to_string(), value.into()));
        self
    }
}

impl BackendClient {
    /// Fetch the rows matching `query`.
    ///
    /// # Errors
    ///
    /// Returns an error on HTTP failure or an unexpected response body.
    pub async fn select<T>(
        &self,
        query: &Query,
        token: Option<&AccessToken>,
    ) -> Result<Vec<T>, BackendError>
    where
        T: DeserializeOwned,
    {
        let request = self
            .request(Method::GET, &query.path(), token)
            .query(query.params());

        Ok(Self::send(request).await?.json().await?)
    }

    /// Insert `body` into `table`, returning the created rows.
    ///
    /// # Errors
    ///
    /// Returns an error on HTTP failure, constraint violations, or an
    /// unexpected response body.
    pub async fn insert<B, T>(
        &self,
        table: &str,
        body: &B,
        token: Option<&AccessToken>,
    ) -> Result<Vec<T>, BackendError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self
            .request(Method::POST, &Query::table(table).path(), token)
            .header("Prefer", "return=representation")
            .json(body);

        Ok(Self::send(request).await?.json().await?)
    }

    /// Insert or merge `body` on the query's conflict target.
    ///
    /// # Errors
    ///
    /// Returns an error on HTTP failure or a rejected write.
    pub async fn upsert<B>(
        &self,
        query: &Query,
        body: &B,
        token: Option<&AccessToken>,
    ) -> Result<(), BackendError>
    where
        B: Serialize + ?Sized,
    {
        let request = self
            .request(Method::POST, &query.path(), token)
            .query(query.params())
            .header("Prefer", "resolution=merge-duplicates,return=minimal")
            .json(body);

        Self::send(request).await?;

        Ok(())
    }

    /// Delete the rows matching `query`.
    ///
    /// # Errors
    ///
    /// Returns an error on HTTP failure or a rejected delete.
    pub async fn delete(&self, query: &Query, token: Option<&AccessToken>) -> Result<(), BackendError> {
        let request = self
            .request(Method::DELETE, &query.path(), token)
            .query(query.params());

        Self::send(request).await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(query: &Query) -> Vec<(&str, &str)> {
        query
            .params()
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
            .collect()
    }

    #[test]
    fn builds_equality_filters() {
        let query = Query::table("tenants")
            .select("unit_id")
            .eq("mobile", "5015551001")
            .eq("unit_id", 7)
            .limit(1);

        assert_eq!(query.path(), "rest/v1/tenants");
        assert_eq!(
            pairs(&query),
            vec![
                ("select", "unit_id"),
                ("mobile", "eq.5015551001"),
                ("unit_id", "eq.7"),
                ("limit", "1"),
            ]
        );
    }

    #[test]
    fn builds_membership_filter_and_order() {
        let query = Query::table("unit_details")
            .select("*")
            .in_list("unit_id", [1, 2, 7])
            .order("created_at", Order::Ascending);

        assert_eq!(
            pairs(&query),
            vec![
                ("select", "*"),
                ("unit_id", "in.(1,2,7)"),
                ("order", "created_at.asc"),
            ]
        );
    }

    #[test]
    fn empty_membership_filter_is_still_well_formed() {
        let query = Query::table("tenants").in_list("unit_id", Vec::<i64>::new());

        assert_eq!(pairs(&query), vec![("unit_id", "in.()")]);
    }

    #[test]
    fn on_conflict_is_a_query_parameter() {
        let query = Query::table("unit_details").on_conflict("unit_id");

        assert_eq!(pairs(&query), vec![("on_conflict", "unit_id")]);
    }
}
