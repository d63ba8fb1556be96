//! Component-local async resource

use std::future::Future;

use crate::error::CoreResult;

/// Data fetched into local (non-store) state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource<T> {
    pub data: Option<T>,
    pub loading: bool,
    pub error: Option<String>,
}

impl<T> Default for Resource<T> {
    fn default() -> Self {
        Self {
            data: None,
            loading: false,
            error: None,
        }
    }
}

impl<T> Resource<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request started: loading on, error cleared, data kept
    pub fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Request finished: write data or error, loading off
    ///
    /// On failure the previous data is left untouched.
    pub fn finish(&mut self, result: CoreResult<T>) {
        match result {
            Ok(data) => self.data = Some(data),
            Err(e) => self.error = Some(e.to_string()),
        }
        self.loading = false;
    }

    /// `begin`, await, `finish`
    pub async fn load<F>(&mut self, fut: F)
    where
        F: Future<Output = CoreResult<T>>,
    {
        self.begin();
        let result = fut.await;
        self.finish(result);
    }

    pub fn is_loaded(&self) -> bool {
        self.data.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;

    #[tokio::test]
    async fn failure_keeps_previous_data() {
        let mut res: Resource<u32> = Resource::new();
        res.load(async { Ok(7) }).await;
        assert_eq!(res.data, Some(7));
        assert!(!res.loading);

        res.load(async { Err(CoreError::RequestFailed("offline".to_string())) })
            .await;
        assert_eq!(res.data, Some(7));
        assert_eq!(res.error.as_deref(), Some("offline"));
        assert!(!res.loading);

        res.begin();
        assert!(res.loading);
        assert_eq!(res.error, None);
    }
}
