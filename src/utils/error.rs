use thiserror::Error;

#[derive(Error, Debug)]
pub enum InventoryError {
    /// 請求未送出或沒有收到回應（連線被拒、DNS、逾時）
    #[error("Transport error: {message}")]
    Transport { message: String },

    /// 收到回應但狀態碼不是 2xx
    #[error("Request failed with status {status}: {message}")]
    RequestFailed { status: u16, message: String },

    /// 必要輸入缺失，在任何網路呼叫之前就失敗
    #[error("Precondition failed: {message}")]
    Precondition { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("CSV output error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid value for '{field}': {value} ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

impl InventoryError {
    pub fn precondition(message: impl Into<String>) -> Self {
        Self::Precondition {
            message: message.into(),
        }
    }

    /// 僅 `RequestFailed` 有狀態碼
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::RequestFailed { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_request_failed(&self) -> bool {
        matches!(self, Self::RequestFailed { .. })
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::Transport { message } => {
                format!("Could not reach the inventory server: {}", message)
            }
            Self::RequestFailed { status, message } => {
                format!("The server rejected the request ({}): {}", status, message)
            }
            Self::Precondition { message } => message.clone(),
            other => other.to_string(),
        }
    }

    /// CLI 結束碼：1 請求失敗、2 前置條件或設定、3 傳輸或檔案
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::RequestFailed { .. } => 1,
            Self::Precondition { .. }
            | Self::Config { .. }
            | Self::InvalidConfigValue { .. } => 2,
            Self::Transport { .. } | Self::Io(_) => 3,
            Self::Serialization(_) | Self::Csv(_) => 1,
        }
    }
}

impl From<reqwest::Error> for InventoryError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport {
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, InventoryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_only_for_request_failed() {
        let err = InventoryError::RequestFailed {
            status: 404,
            message: "Batch not found".to_string(),
        };
        assert_eq!(err.status(), Some(404));
        assert!(err.is_request_failed());

        let err = InventoryError::Transport {
            message: "connection refused".to_string(),
        };
        assert_eq!(err.status(), None);
        assert!(!err.is_request_failed());
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(InventoryError::precondition("no token").exit_code(), 2);
        assert_eq!(
            InventoryError::Transport {
                message: "refused".to_string()
            }
            .exit_code(),
            3
        );
        assert_eq!(
            InventoryError::RequestFailed {
                status: 500,
                message: "boom".to_string()
            }
            .exit_code(),
            1
        );
    }

    #[test]
    fn test_display_contains_status_and_message() {
        let err = InventoryError::RequestFailed {
            status: 409,
            message: "duplicate school id".to_string(),
        };
        let text = err.to_string();
        assert!(text.contains("409"));
        assert!(text.contains("duplicate school id"));
    }
}
