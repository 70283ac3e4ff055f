//! 模型调用策略函数

/// 模型是否属于fast/flash系列。
/// 这类模型的推理预算由max_tokens推导，见reasoning_budget。
pub fn is_fast_family(model: &str) -> bool {
    let model = model.to_lowercase();
    model.contains("flash") || model.contains("fast")
}

/// 推理预算策略：fast/flash族模型取 max(1, floor(max_tokens / 4))，
/// 其余模型不设置。固定策略，不对用户开放配置。
pub fn reasoning_budget(model: &str, max_tokens: u32) -> Option<u32> {
    if is_fast_family(model) {
        Some((max_tokens / 4).max(1))
    } else {
        None
    }
}
