//! Request and response bodies of the hosted proxy functions.
//!
//! Both endpoints answer with either a success body or
//! `{ "error": ..., "details"?: ..., "code"?: ... }`, so responses are
//! modelled as one struct of optional fields.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslateRequest {
    pub text: String,
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TranslateResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub result: Option<String>,
    #[serde(default)]
    pub from: Option<String>,
    #[serde(default)]
    pub to: Option<String>,
    #[serde(default)]
    pub original: Option<String>,
    #[serde(flatten)]
    pub failure: ProxyFailureFields,
}

impl TranslateResponse {
    pub fn into_result(self) -> Result<String, ProxyFailure> {
        match self.result {
            Some(result) if self.success && !result.is_empty() => Ok(result),
            _ => Err(self.failure.into_failure("empty translation result")),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TtsRequest {
    pub text: String,
    pub spd: u8,
    pub pit: u8,
    pub vol: u8,
    pub per: u8,
    pub lan: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TtsResponse {
    #[serde(default)]
    pub success: bool,
    /// Base64-encoded audio.
    #[serde(default)]
    pub audio_content: Option<String>,
    #[serde(default)]
    pub format: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(flatten)]
    pub failure: ProxyFailureFields,
}

impl TtsResponse {
    pub fn into_audio_content(self) -> Result<String, ProxyFailure> {
        match self.audio_content {
            Some(audio) if self.success && !audio.is_empty() => Ok(audio),
            _ => Err(self.failure.into_failure("empty synthesis result")),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProxyFailureFields {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl ProxyFailureFields {
    fn into_failure(self, fallback: &str) -> ProxyFailure {
        ProxyFailure {
            error: self.error.unwrap_or_else(|| fallback.to_string()),
            details: self.details,
            code: self.code,
        }
    }
}

/// An error body returned by a proxy function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyFailure {
    pub error: String,
    pub details: Option<String>,
    pub code: Option<String>,
}

impl fmt::Display for ProxyFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.error)?;
        if let Some(code) = &self.code {
            write!(f, " (code {code}")?;
            if let Some(msg) = translate_error_message(code).or_else(|| tts_error_message(code)) {
                write!(f, ": {msg}")?;
            }
            f.write_str(")")?;
        }
        if let Some(details) = &self.details {
            write!(f, ": {details}")?;
        }
        Ok(())
    }
}

/// Meaning of an error code reported by the translation vendor.
pub fn translate_error_message(code: &str) -> Option<&'static str> {
    Some(match code {
        "52001" => "APP ID 或密钥错误",
        "52002" => "系统错误",
        "52003" => "授权失败",
        "54000" => "必填参数为空",
        "54001" => "签名错误",
        "54003" => "访问频率受限",
        "54004" => "账户余额不足",
        "54005" => "长query请求频繁",
        "58000" => "客户端IP非法",
        "58001" => "译文语言方向不支持",
        "58002" => "服务当前已关闭",
        "90107" => "认证未通过或未生效",
        _ => return None,
    })
}

/// Meaning of an error code reported by the speech vendor.
pub fn tts_error_message(code: &str) -> Option<&'static str> {
    Some(match code {
        "500" => "不支持输入",
        "501" | "3300" => "输入参数不正确",
        "502" => "token验证失败",
        "503" => "合成后端错误",
        "3301" | "3302" => "音频转码失败",
        "3303" => "服务器内部错误",
        _ => return None,
    })
}

/// Where the hosted proxy functions live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyConfig {
    /// Project base URL, e.g. `https://xyz.supabase.co`.
    pub base_url: String,
    /// Sent as `Authorization: Bearer <key>` when present.
    pub api_key: Option<String>,
}

impl ProxyConfig {
    pub const TRANSLATE_FUNCTION: &'static str = "translate";
    pub const TTS_FUNCTION: &'static str = "tts-baidu";

    pub fn function_url(&self, name: &str) -> String {
        format!("{}/functions/v1/{name}", self.base_url.trim_end_matches('/'))
    }
}
