//! Npc Context - 任务状态枚举
//!
//! 固定的任务进度集合，每个状态对应一条注入到提示词中的提示语。
//! 写入时不做枚举校验：未知状态原样保存，只是不产生提示语。

/// 任务进度
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    Start,
    Accepted,
    Reward,
    Finished,
}

impl TaskStatus {
    /// 新建对话的初始状态
    pub const INITIAL: TaskStatus = TaskStatus::Start;

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Start => "start",
            TaskStatus::Accepted => "accepted",
            TaskStatus::Reward => "reward",
            TaskStatus::Finished => "finished",
        }
    }

    /// 解析状态名，未知名称返回 None
    pub fn parse(status: &str) -> Option<TaskStatus> {
        match status {
            "start" => Some(TaskStatus::Start),
            "accepted" => Some(TaskStatus::Accepted),
            "reward" => Some(TaskStatus::Reward),
            "finished" => Some(TaskStatus::Finished),
            _ => None,
        }
    }

    /// 该状态对应的提示语
    pub fn hint(&self) -> &'static str {
        match self {
            TaskStatus::Start => {
                "The player don't know or have accepted the task at all, \
                 so you need ask him/her to accept task."
            }
            TaskStatus::Accepted => {
                "The player just accepted the task and didn't complete it, \
                 so you should urge him/her to complete the task."
            }
            TaskStatus::Reward => {
                "The player am already finish the task, now he/she have completed the task, \
                 you should urge him/her to deliver that box."
            }
            TaskStatus::Finished => "The player has completed the task.",
        }
    }

    /// 按原始字符串查找提示语，未知状态没有提示语
    pub fn hint_for(status: &str) -> Option<&'static str> {
        Self::parse(status).map(|s| s.hint())
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_statuses() {
        assert_eq!(TaskStatus::parse("start"), Some(TaskStatus::Start));
        assert_eq!(TaskStatus::parse("accepted"), Some(TaskStatus::Accepted));
        assert_eq!(TaskStatus::parse("reward"), Some(TaskStatus::Reward));
        assert_eq!(TaskStatus::parse("finished"), Some(TaskStatus::Finished));
    }

    #[test]
    fn test_parse_unknown_status() {
        assert_eq!(TaskStatus::parse("lowoption"), None);
        assert_eq!(TaskStatus::parse(""), None);
    }

    #[test]
    fn test_hint_for_unknown_status_is_none() {
        assert!(TaskStatus::hint_for("no-such-status").is_none());
    }

    #[test]
    fn test_roundtrip() {
        for status in ["start", "accepted", "reward", "finished"] {
            assert_eq!(TaskStatus::parse(status).unwrap().as_str(), status);
        }
    }
}
