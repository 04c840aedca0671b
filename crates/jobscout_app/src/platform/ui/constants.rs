pub const TITLE: &str = "JobScout";
pub const PROMPT: &str = "> ";
pub const COMMAND_PREFIX: char = ':';

pub const HELP_TEXT: &str = "\
Type a keyword and press Enter to add it.
  :draft <text>     put text in the keyword box without adding it
  :add              add whatever is in the keyword box
  :rm <keyword>     remove a keyword (every copy of it)
  :search           search jobs for the current keywords
  :cancel           abandon the running search
  :select <keyword> show companies found for a keyword
  :help             show this text
  :quit             leave";
