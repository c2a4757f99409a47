//! 共享测试工具和辅助函数

#![allow(dead_code)]

use std::env;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use porkbun_dns::{
    ClientBuilder, HttpRequest, HttpResponse, HttpTransport, PorkbunClient, TransportError,
};

/// 跳过测试的宏（当环境变量缺失时）
#[macro_export]
macro_rules! skip_if_no_credentials {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).map_or(true, |v| v.is_empty()) {
                eprintln!("跳过测试: 缺少环境变量 {}", $var);
                return;
            }
        )+
    };
}

/// 断言 `Option` 为 `Some`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_some {
    ($expr:expr $(,)?) => {{
        let opt = $expr;
        assert!(opt.is_some(), "expected Some(..), got None");
        let Some(val) = opt else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let opt = $expr;
        assert!(opt.is_some(), "{}", format_args!($($msg)+));
        let Some(val) = opt else {
            return;
        };
        val
    }};
}

/// 断言 `Result` 为 `Ok`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(
            res.is_ok(),
            "{}: {res:?}",
            format_args!($($msg)+)
        );
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// 断言 `Result` 为 `Err`，并解包返回错误（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_err {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_err(), "expected Err(..), got {res:?}");
        let Err(err) = res else {
            return;
        };
        err
    }};
}

pub const TEST_API_KEY: &str = "apikey";
pub const TEST_SECRET_KEY: &str = "secretkey";

/// 回显请求体的 Transport（状态码 200）
pub struct EchoTransport;

#[async_trait]
impl HttpTransport for EchoTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        Ok(HttpResponse::new(200, request.body.unwrap_or_default()))
    }
}

/// 记录所有请求并返回预设结果的 Transport
pub struct RecordingTransport {
    outcome: Result<HttpResponse, TransportError>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl RecordingTransport {
    pub fn responding(status: u16, body: &str) -> Arc<Self> {
        Arc::new(Self {
            outcome: Ok(HttpResponse::new(status, body)),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn failing(error: TransportError) -> Arc<Self> {
        Arc::new(Self {
            outcome: Err(error),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }

    /// 最后一个请求的请求体（按 JSON 解析）
    pub fn last_body(&self) -> Option<serde_json::Value> {
        let body = self.requests().pop()?.body?;
        serde_json::from_slice(&body).ok()
    }
}

#[async_trait]
impl HttpTransport for RecordingTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request);
        }
        self.outcome.clone()
    }
}

/// 使用测试凭证和指定 Transport 的客户端
pub fn client_with(transport: Arc<dyn HttpTransport>) -> PorkbunClient {
    PorkbunClient::builder()
        .api_key(TEST_API_KEY)
        .secret_key(TEST_SECRET_KEY)
        .base_url("http://porkbun.test")
        .shared_transport(transport)
        .build()
        .expect("创建测试客户端失败")
}

/// 指向 mock server 的真实 reqwest 客户端
pub fn client_for_server(uri: &str) -> PorkbunClient {
    ClientBuilder::new()
        .api_key(TEST_API_KEY)
        .secret_key(TEST_SECRET_KEY)
        .base_url(uri)
        .build()
        .expect("创建测试客户端失败")
}

/// 真实 API 的测试上下文
pub struct LiveContext {
    pub client: PorkbunClient,
    pub domain: String,
}

impl LiveContext {
    pub fn from_env() -> Option<Self> {
        let domain = env::var("TEST_DOMAIN").ok()?;
        let client = PorkbunClient::from_env().ok()?;
        Some(Self { client, domain })
    }
}
