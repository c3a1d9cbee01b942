/// Message shown when a rule number falls outside the rule book.
pub const INVALID_RULE_MESSAGE: &str = "Invalid rule number. Use 1–10.";

pub const RULE_COUNT: usize = 10;

/// Vetting application thread, shared by every wiki mirror.
const VETTING_LINK: &str =
    "https://discord.com/channels/629113661113368594/693601096467218523/1349427482637635677";

/// The server's ten rules, rendered for one wiki origin.
#[derive(Clone, Debug)]
pub struct RuleBook {
    rules_url: String,
    rules: [String; RULE_COUNT],
}

impl RuleBook {
    pub fn new(base_link: &str) -> Self {
        let base = base_link.trim_end_matches('/');

        let rules = [
            "**1️⃣ Be Respectful**\nTreat everyone respectfully. Disrespectful or toxic behavior will result in action.".to_owned(),
            "**2️⃣ 18+ Only**\nPA is for adults only. You must be 18 or older to participate.".to_owned(),
            "**3️⃣ Be Civil & Read the Room**\nAvoid sensitive topics unless everyone is comfortable. No such discussions in text channels.".to_owned(),
            "**4️⃣ NSFW Content Is Not Allowed**\nExplicit, grotesque, or pornographic content will result in a ban.".to_owned(),
            "**5️⃣ Communication - English Preferred**\nPlease speak in English so the whole community can engage.".to_owned(),
            format!(
                "**6️⃣ Use Channels & Roles Properly**\nUse the correct channels for each topic.\n📌 [Roles How-To]({base}/discord/roles)\n📌 [LFG Guide]({base}/discord/lfg)"
            ),
            "**7️⃣ Promoting Your Own Content**\nPromote in #promote-yourself or #clip-sharing only. Apply in #applications to post on official PA platforms.".to_owned(),
            "**8️⃣ Crowdfunding & Solicitation**\nNo donation or solicitation links allowed. DM spam is not tolerated.".to_owned(),
            format!(
                "**9️⃣ No Unapproved Invites or Links**\nGame server links require vetting and Discord invites are absolutely not allowed.\n📌 [Host/Advertise]({base}/servers/hosting)\n📌 [Apply for Vetting]({VETTING_LINK})"
            ),
            "**🔟 Build-A-VC Channel Names**\nChannel names must be clean and appropriate for Discord Discovery.".to_owned(),
        ];

        Self {
            rules_url: format!("{base}/rules"),
            rules,
        }
    }

    /// Text of rule `number` (1-based), or `None` outside 1..=10.
    pub fn rule_text(&self, number: i64) -> Option<&str> {
        let index = usize::try_from(number).ok()?.checked_sub(1)?;
        self.rules.get(index).map(String::as_str)
    }

    /// Link to the full rules page.
    pub fn rules_url(&self) -> &str {
        &self.rules_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://wiki.example.org";

    #[test]
    fn every_rule_in_range_has_text() {
        let book = RuleBook::new(BASE);

        for number in 1..=10 {
            let text = book.rule_text(number).unwrap();
            assert!(!text.is_empty(), "rule {number} is empty");
            assert!(text.starts_with("**"), "rule {number} has no heading");
        }
    }

    #[test]
    fn out_of_range_numbers_have_no_text() {
        let book = RuleBook::new(BASE);

        assert_eq!(book.rule_text(0), None);
        assert_eq!(book.rule_text(11), None);
        assert_eq!(book.rule_text(-3), None);
        assert_eq!(book.rule_text(i64::MAX), None);
    }

    #[test]
    fn rule_three_heading() {
        let book = RuleBook::new(BASE);

        assert!(
            book.rule_text(3)
                .unwrap()
                .starts_with("**3️⃣ Be Civil & Read the Room**")
        );
    }

    #[test]
    fn linked_rules_use_base_link() {
        let book = RuleBook::new("https://wiki.example.org/");

        assert!(
            book.rule_text(6)
                .unwrap()
                .contains("(https://wiki.example.org/discord/roles)")
        );
        assert!(
            book.rule_text(9)
                .unwrap()
                .contains("(https://wiki.example.org/servers/hosting)")
        );
        assert_eq!(book.rules_url(), "https://wiki.example.org/rules");
    }
}
