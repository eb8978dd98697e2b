//! Error Kind - Classification of errors
//!
//! Defines the [`ErrorKind`] enum shared by every client crate. Each kind maps
//! to the HTTP status the backend would use for it and to the process exit
//! code used by the terminal front end.

use serde::Serialize;

/// エラー種別の列挙体
///
/// バックエンドの HTTP ステータスコードと対応するエラー分類を定義します。
/// クライアント側では、レスポンスのステータスから種別を逆引きし、
/// 端末フロントエンドの終了コードにも変換します。
///
/// ## Notes
/// * `non_exhaustive` - 将来的に列挙子が追加される可能性があることを示す
///
/// ## Examples
/// ```rust
/// use kernel::error::kind::ErrorKind;
///
/// let kind = ErrorKind::Unauthorized;
/// assert_eq!(kind.status_code(), 401);
/// assert_eq!(kind.as_str(), "Unauthorized");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum ErrorKind {
    /// 400 - Bad Request: 入力が不正
    BadRequest,
    /// 401 - Unauthorized: 認証情報が不正
    Unauthorized,
    /// 403 - Forbidden: アクセス権限なし
    Forbidden,
    /// 404 - Not Found: リソースが見つからない
    NotFound,
    /// 408 - Request Timeout: リクエストタイムアウト
    RequestTimeout,
    /// 409 - Conflict: 現在の状態と競合
    Conflict,
    /// 410 - Gone: 期限切れ
    Gone,
    /// 422 - Unprocessable Entity: 処理不可能なエンティティ
    UnprocessableEntity,
    /// 429 - Too Many Requests: レート制限超過
    TooManyRequests,
    /// 500 - Internal Server Error: 内部エラー
    InternalServerError,
    /// 502 - Bad Gateway: バックエンドの応答が不正
    BadGateway,
    /// 503 - Service Unavailable: バックエンドに到達できない
    ServiceUnavailable,
}

impl ErrorKind {
    /// HTTP ステータスコードを取得
    ///
    /// ## Examples
    /// ```rust
    /// use kernel::error::kind::ErrorKind;
    /// assert_eq!(ErrorKind::BadRequest.status_code(), 400);
    /// assert_eq!(ErrorKind::BadGateway.status_code(), 502);
    /// ```
    #[inline]
    pub const fn status_code(&self) -> u16 {
        match self {
            ErrorKind::BadRequest => 400,
            ErrorKind::Unauthorized => 401,
            ErrorKind::Forbidden => 403,
            ErrorKind::NotFound => 404,
            ErrorKind::RequestTimeout => 408,
            ErrorKind::Conflict => 409,
            ErrorKind::Gone => 410,
            ErrorKind::UnprocessableEntity => 422,
            ErrorKind::TooManyRequests => 429,
            ErrorKind::InternalServerError => 500,
            ErrorKind::BadGateway => 502,
            ErrorKind::ServiceUnavailable => 503,
        }
    }

    /// HTTP ステータスコードから種別を逆引き
    ///
    /// 未知の 4xx は `BadRequest`、未知の 5xx は `BadGateway` に丸めます。
    /// それ以外（2xx/3xx など）は `InternalServerError` を返します。
    ///
    /// ## Examples
    /// ```rust
    /// use kernel::error::kind::ErrorKind;
    /// assert_eq!(ErrorKind::from_status_code(409), ErrorKind::Conflict);
    /// assert_eq!(ErrorKind::from_status_code(418), ErrorKind::BadRequest);
    /// assert_eq!(ErrorKind::from_status_code(504), ErrorKind::BadGateway);
    /// ```
    pub const fn from_status_code(status: u16) -> Self {
        match status {
            400 => ErrorKind::BadRequest,
            401 => ErrorKind::Unauthorized,
            403 => ErrorKind::Forbidden,
            404 => ErrorKind::NotFound,
            408 => ErrorKind::RequestTimeout,
            409 => ErrorKind::Conflict,
            410 => ErrorKind::Gone,
            422 => ErrorKind::UnprocessableEntity,
            429 => ErrorKind::TooManyRequests,
            503 => ErrorKind::ServiceUnavailable,
            400..=499 => ErrorKind::BadRequest,
            500..=599 => ErrorKind::BadGateway,
            _ => ErrorKind::InternalServerError,
        }
    }

    /// ユーザー向けの文字列表現を取得
    ///
    /// ## Examples
    /// ```rust
    /// use kernel::error::kind::ErrorKind;
    /// assert_eq!(ErrorKind::BadRequest.as_str(), "Bad Request");
    /// ```
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::BadRequest => "Bad Request",
            ErrorKind::Unauthorized => "Unauthorized",
            ErrorKind::Forbidden => "Forbidden",
            ErrorKind::NotFound => "Not Found",
            ErrorKind::RequestTimeout => "Request Timeout",
            ErrorKind::Conflict => "Conflict",
            ErrorKind::Gone => "Gone",
            ErrorKind::UnprocessableEntity => "Unprocessable Entity",
            ErrorKind::TooManyRequests => "Too Many Requests",
            ErrorKind::InternalServerError => "Internal Error",
            ErrorKind::BadGateway => "Bad Gateway",
            ErrorKind::ServiceUnavailable => "Service Unavailable",
        }
    }

    /// プロセス終了コードを取得（sysexits.h 準拠）
    ///
    /// * 入力不正 → 65 (`EX_DATAERR`)
    /// * 認証・権限 → 77 (`EX_NOPERM`)
    /// * 一時的な障害 → 75 (`EX_TEMPFAIL`)
    /// * バックエンド到達不可 → 69 (`EX_UNAVAILABLE`)
    /// * 内部エラー → 70 (`EX_SOFTWARE`)
    #[inline]
    pub const fn exit_code(&self) -> u8 {
        match self {
            ErrorKind::BadRequest
            | ErrorKind::NotFound
            | ErrorKind::Conflict
            | ErrorKind::UnprocessableEntity => 65,
            ErrorKind::Unauthorized | ErrorKind::Forbidden | ErrorKind::Gone => 77,
            ErrorKind::RequestTimeout | ErrorKind::TooManyRequests => 75,
            ErrorKind::BadGateway | ErrorKind::ServiceUnavailable => 69,
            ErrorKind::InternalServerError => 70,
        }
    }

    /// サーバー側（または内部）のエラーかどうかを判定
    ///
    /// 5xx系のエラーは `true` を返します。
    /// これらのエラーはログに記録すべきです。
    #[inline]
    pub const fn is_server_error(&self) -> bool {
        self.status_code() >= 500
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
