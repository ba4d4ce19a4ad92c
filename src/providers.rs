//! Static catalogue of the LLM providers the chat UI can talk to.
//!
//! The table is compiled into the binary and never mutated, so lookups are
//! plain linear scans over a dozen entries. Credential storage and the HTTP
//! calls themselves live behind the native bridge and are not handled here.

use serde::Serialize;

/// Icon shown for provider ids the catalogue does not know about.
pub const DEFAULT_PROVIDER_ICON: &str = "/src/assets/images/providers/default.png";

/// One row of the provider catalogue.
#[derive(Debug, Clone, Serialize)]
pub struct ProviderInfo {
    pub id: &'static str,
    pub display_name: &'static str,
    pub icon: &'static str,
    pub endpoint: &'static str,
    pub models: &'static [&'static str],
}

/// The provider catalogue. Ordering is the order selectors render in; model
/// lists are kept verbatim from the product tables, duplicates included.
pub const LLM_PROVIDERS: &[ProviderInfo] = &[
    ProviderInfo {
        id: "openai",
        display_name: "OpenAI",
        icon: "/src/assets/images/providers/openai.png",
        endpoint: "https://api.openai.com/v1",
        models: &["gpt-4o", "gpt-4o-mini", "gpt-4.1"],
    },
    ProviderInfo {
        id: "deepseek",
        display_name: "DeepSeek",
        icon: "/src/assets/images/providers/deepseek.png",
        endpoint: "https://api.deepseek.com/v1",
        models: &["deepseek-chat", "deepseek-reasoner"],
    },
    ProviderInfo {
        id: "siliconflow",
        display_name: "硅基流动(siliconflow)",
        icon: "/src/assets/images/providers/deepseek.png",
        endpoint: "https://api.siliconflow.cn/v1",
        models: &[
            "THUDM/GLM-Z1-32B-0414",
            "THUDM/GLM-4-32B-0414",
            "THUDM/GLM-Z1-Rumination-32B-0414",
            "THUDM/GLM-4-9B-0414",
            "THUDM/GLM-4-9B-0414",
            "Qwen/QwQ-32B",
            "Pro/deepseek-ai/DeepSeek-R1",
            "Pro/deepseek-ai/DeepSeek-V3",
            "deepseek-ai/DeepSeek-R1",
            "deepseek-ai/DeepSeek-V3",
            "deepseek-ai/DeepSeek-R1-Distill-Qwen-32B",
            "deepseek-ai/DeepSeek-R1-Distill-Qwen-14B",
            "deepseek-ai/DeepSeek-R1-Distill-Qwen-7B",
            "deepseek-ai/DeepSeek-R1-Distill-Qwen-1.5B",
            "Pro/deepseek-ai/DeepSeek-R1-Distill-Qwen-7B",
            "Pro/deepseek-ai/DeepSeek-R1-Distill-Qwen-1.5B",
        ],
    },
    ProviderInfo {
        id: "baidu",
        display_name: "百度",
        icon: "/src/assets/images/providers/baidu.png",
        endpoint: "https://qianfan.baidubce.com/v2",
        models: &[
            "ernie-x1-32k",
            "ernie-4.0-8k-latest",
            "ernie-4.0-8k",
            "ernie-4.0-turbo-8k-latest",
            "ernie-4.0-turbo-128k",
            "ernie-3.5-128k",
            "deepseek-v3",
            "deepseek-r1",
        ],
    },
    ProviderInfo {
        id: "tongyi",
        display_name: "通义千问",
        icon: "/src/assets/images/providers/tongyi.png",
        endpoint: "https://dashscope.aliyuncs.com/compatible-mode/v1",
        models: &["qwen-max", "qwen-plus", "qwen-turbo", "qwen-long"],
    },
    ProviderInfo {
        id: "hunyuan",
        display_name: "腾讯混元",
        icon: "/src/assets/images/providers/hunyuan.png",
        endpoint: "https://api.hunyuan.cloud.tencent.com/v1",
        models: &[
            "hunyuan-lite",
            "hunyuan-standard",
            "hunyuan-standard-256k",
            "hunyuan-turbo-latest",
            "hunyuan-large",
            "hunyuan-large-longcontext",
        ],
    },
    ProviderInfo {
        id: "huoshan",
        display_name: "火山引擎",
        icon: "/src/assets/images/providers/huoshan.png",
        endpoint: "https://ark.cn-beijing.volces.com/api/v3/",
        models: &[
            "doubao-1-5-pro-32k-250115",
            "doubao-1-5-pro-256k-250115",
            "doubao-1.5-lite-32k-250115",
            "deepseek-v3-250324",
            "deepseek-v3-241226",
        ],
    },
    ProviderInfo {
        id: "gemini",
        display_name: "Google Gemini",
        icon: "/src/assets/images/providers/gemini.png",
        endpoint: "https://generativelanguage.googleapis.com/v1beta/openai/",
        models: &[
            "gemini-2.0-flash",
            "gemini-2.0-flash-lite",
            "gemini-1.5-flash",
            "gemini-1.5-pro",
        ],
    },
    ProviderInfo {
        id: "spark",
        display_name: "讯飞星火",
        icon: "/src/assets/images/providers/gemini.png",
        endpoint: "https://spark-api-open.xf-yun.com/v1",
        models: &[
            "x1",
            "4.0Ultra",
            "generalv3.5",
            "max-32k",
            "generalv3",
            "pro-128k",
            "lite",
        ],
    },
    ProviderInfo {
        id: "cohere",
        display_name: "cohere",
        icon: "/src/assets/images/providers/cohere.png",
        endpoint: "https://api.cohere.ai/compatibility/v1",
        models: &["command-r-plus", "command-r", "command", "command-light"],
    },
    ProviderInfo {
        id: "kimi",
        display_name: "Kimi",
        icon: "/src/assets/images/providers/kimi.png",
        endpoint: "https://api.moonshot.cn/v1",
        models: &[
            "kimi-latest-8k",
            "kimi-latest-32k",
            "kimi-latest-128k",
            "moonshot-v1-8k",
            "moonshot-v1-32k",
            "moonshot-v1-128k",
        ],
    },
    ProviderInfo {
        id: "baichuan",
        display_name: "百川智能",
        icon: "/src/assets/images/providers/baichuan.png",
        endpoint: "https://api.baichuan-ai.com/v1",
        models: &[
            "Baichuan4-Turbo",
            "Baichuan4-Air",
            "Baichuan4",
            "Baichuan3-Turbo",
            "Baichuan3-Turbo-128k",
            "Baichuan2-Turbo",
        ],
    },
];

/// Look up a provider by id. A miss is a normal outcome, not an error.
pub fn get_provider_by_id(provider_id: &str) -> Option<&'static ProviderInfo> {
    LLM_PROVIDERS.iter().find(|p| p.id == provider_id)
}

/// Icon for a provider, falling back to [`DEFAULT_PROVIDER_ICON`].
pub fn get_provider_icon(provider_id: &str) -> &'static str {
    get_provider_by_id(provider_id)
        .map(|p| p.icon)
        .unwrap_or(DEFAULT_PROVIDER_ICON)
}

/// Models offered by a provider; empty when the id is unknown.
pub fn get_provider_models(provider_id: &str) -> &'static [&'static str] {
    get_provider_by_id(provider_id)
        .map(|p| p.models)
        .unwrap_or(&[])
}
