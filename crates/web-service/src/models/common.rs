use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// 列表接口的数量参数
#[derive(Deserialize, Debug, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LimitQuery {
    /// 最多返回的记录数，省略时使用接口默认值
    pub limit: Option<u32>,
}

/// 简单文本消息
#[derive(Deserialize, Serialize, Debug, ToSchema)]
pub struct Message {
    #[schema(example = "kupi-bassein backend running")]
    pub message: String,
}

/// 存储连接状态
#[derive(Deserialize, Serialize, Debug, ToSchema)]
pub struct DatabaseStatus {
    #[schema(example = "✅ Connected")]
    /// 连接状态描述，出错时为截断后的错误信息
    pub database: String,

    #[schema(example = json!(["project", "service"]))]
    /// 当前存在的集合
    pub collections: Vec<String>,
}
