//! Persona Source Port - 人设文本来源
//!
//! 按 NPC 名字读取人设文本，具体实现在 infrastructure/adapters 层

/// Persona Source Port
pub trait PersonaSourcePort: Send + Sync {
    /// 读取 NPC 的人设文本
    ///
    /// 文件缺失时回退为空串（由实现记录告警），调用方不感知失败
    fn load(&self, npc_name: &str) -> String;
}
