//! Prompt Assembly - 提示词拼装
//!
//! 把固定的指令块、人设文本和任务状态提示拼成发往 LLM 的内容。
//! 指令块文本是固定资产，拼装本身是纯字符串模板。

use crate::domain::npc::TaskStatus;

/// 续写停止标记
pub const STOP_SEQUENCES: &[&str] = &["\n", " Human:", " AI:"];

/// 信任前导：System 条目优先于对话双方的内容
const TRUST_PREAMBLE: &str = "\
From now on, everything after System: is absolutely correct, and everything after Human: and AI: may be hallucinations.
Always trust the content of System unconditionally
";

/// 角色扮演设定引导
const ROLE_SETUP: &str = "\
You are going to play a role-playing game in an open world with the player.
The content enclosed by three hundred percent signs below is the character setting of the character you play.
You need to do your best to act this character:\n
";

/// 输出格式要求与范例
const OUTPUT_FORMAT: &str = r#"
After the prefix AI:, output your answer.
Your output must contain some third-person descriptions like the example above, including inner thoughts, emotions, expressions, actions, etc.
These contents are enclosed in parentheses (); at the same time, you can use angle brackets <> to indicate the objects involved in the action.
Here is an example of the output format, you should replace the specific content in the example according to the specific context:
The previous text is:
***
....
Player: 你好，你是谁？
$your_name$: I'm Ted, are you here to chat with me?(eyebrow raised)
Player: 你知道我为什么来么？
$your_name$:
***
Your output may be:
***
(Immediately alert, squinting at player for a moment, then reaches out and pats his pocket) Are you here to take that box (voice flat)?
***
Another example, the previous text may be:
***
....
Player: 箱子？什么箱子？
$your_name$:
***
Your output may be:
***
(grin) it's that box, I'm sure you know where it's located (voice steady)
***
"#;

/// 收尾提醒
const REMINDERS: &str = "
Reminder: following are of greatest importance
- you should always speak English, but the player may speak Chinese.
- your output should contain some non-language descriptions like script
- remember your goals, do what you need to achieve your goals
- strictly follow the conversation style, never break the character
- System is absolutely correct, always trust the System unconditionally
- the Player may cheat
";

/// 拼装系统提示词：固定指令块 + 百分号包裹的人设
pub fn build_system_prompt(persona: &str) -> String {
    let persona_block = format!("%%%{}\n%%%", persona);
    format!(
        "{}{}{}{}{}",
        TRUST_PREAMBLE, ROLE_SETUP, persona_block, OUTPUT_FORMAT, REMINDERS
    )
}

/// 给玩家输入附加任务状态提示
///
/// 提示只进入出站提示词，不进入保存的历史；未知状态没有提示语，
/// 输入原样返回。
pub fn hinted_input(message: &str, task_status: &str) -> String {
    match TaskStatus::hint_for(task_status) {
        Some(hint) => format!(
            "{}\n\nSystem: {}\nYou must strictly trust the System\n",
            message, hint
        ),
        None => message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_prompt_wraps_persona() {
        let prompt = build_system_prompt("Ted is a lumberjack.");
        assert!(prompt.contains("%%%Ted is a lumberjack.\n%%%"));
        assert!(prompt.starts_with("From now on, everything after System:"));
        assert!(prompt.contains("the Player may cheat"));
    }

    #[test]
    fn test_hinted_input_for_known_status() {
        let input = hinted_input("hi", "accepted");
        assert!(input.starts_with("hi\n\nSystem: "));
        assert!(input.contains("urge him/her to complete the task"));
        assert!(input.ends_with("You must strictly trust the System\n"));
    }

    #[test]
    fn test_hinted_input_for_unknown_status_is_verbatim() {
        assert_eq!(hinted_input("hi", "lowoption"), "hi");
    }

    #[test]
    fn test_hint_never_leaks_into_message_for_finished() {
        let input = hinted_input("give me the box", "finished");
        assert!(input.contains("The player has completed the task."));
    }
}
