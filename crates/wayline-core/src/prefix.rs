use alloc::string::String;
use alloc::vec::Vec;

/// 计算斜杠分隔路径的累积前缀链。
///
/// # 教案级说明
/// - **意图 (Why)**：前缀链定义面包屑的粒度——路径每一段对应一个潜在的轨迹节点，
///   分组路由与展示 URI 都以链中元素为对照基准；
/// - **契约 (What)**：输入为斜杠分隔路径（可为空、可含前导斜杠）；输出首元素恒为
///   根标记 `/`，随后按段序给出各深度的累积前缀；空段产生的空前缀被丢弃；
/// - **执行逻辑 (How)**：按 `/` 切分；第 *i* 段的前缀为前 *i* 段以 `/` 连接后再接
///   当前段，去除所有前导 `/`；
/// - **边界 (Edge cases)**：
///   - 空路径只产出根标记；
///   - 前导斜杠产生的首个空段并入根标记，不产生空前缀；
///   - 尾随斜杠保留连接后的形态（如 `"a/b/"`），路径归一化是宿主框架的职责。
pub fn prefix_chain(path: &str) -> Vec<String> {
    let segments: Vec<&str> = path.split('/').collect();
    let mut chain = Vec::with_capacity(segments.len() + 1);
    chain.push(String::from("/"));

    for (position, segment) in segments.iter().enumerate() {
        let mut joined = segments[..position].join("/");
        joined.push('/');
        joined.push_str(segment);
        let trimmed = joined.trim_start_matches('/');
        if trimmed.is_empty() {
            continue;
        }
        chain.push(String::from(trimmed));
    }

    chain
}
