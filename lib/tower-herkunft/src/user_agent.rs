use once_cell::sync::Lazy;
use regex::Regex;

/// Ordered by specificity. Most browsers claim to be Chrome and Safari at the same time.
static BROWSER_REGEXES: Lazy<Vec<(&'static str, Regex)>> = Lazy::new(|| {
    [
        ("Edge", r"Edg(?:e|A|iOS)?/(\S+)"),
        ("Opera", r"(?:OPR|Opera)/(\S+)"),
        ("Brave", r"(?:^|\s)Brave(?:/(\S+))?(?:\s|$)"),
        ("Samsung Internet", r"SamsungBrowser/(\S+)"),
        ("Firefox", r"(?:Firefox|FxiOS)/(\S+)"),
        ("Chrome", r"(?:Chrome|CriOS)/(\S+)"),
        ("Safari", r"Version/(\S+).*Safari/"),
        ("Internet Explorer", r"(?:MSIE |Trident/.*rv:)([\d.]+)"),
    ]
    .into_iter()
    .map(|(family, pattern)| {
        let regex = Regex::new(pattern).expect("[Bug] Failed to compile User-Agent regex");
        (family, regex)
    })
    .collect()
});

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Browser<'a> {
    pub family: &'static str,
    pub version: Option<&'a str>,
}

pub fn parse(user_agent: &str) -> Browser<'_> {
    BROWSER_REGEXES
        .iter()
        .find_map(|&(family, ref regex)| {
            let captures = regex.captures(user_agent)?;
            Some(Browser {
                family,
                version: captures.get(1).map(|version| version.as_str()),
            })
        })
        .unwrap_or(Browser {
            family: "Other",
            version: None,
        })
}

#[cfg(test)]
mod test {
    use super::{parse, Browser};

    const USER_AGENTS: &[(&str, &str, Option<&str>)] = &[
        (
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
            "Chrome",
            Some("120.0.0.0"),
        ),
        (
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36 Edg/120.0.2210.91",
            "Edge",
            Some("120.0.2210.91"),
        ),
        (
            "Mozilla/5.0 (X11; Linux x86_64; rv:109.0) Gecko/20100101 Firefox/121.0",
            "Firefox",
            Some("121.0"),
        ),
        (
            "Mozilla/5.0 (Macintosh; Intel Mac OS X 14_2) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.2 Safari/605.1.15",
            "Safari",
            Some("17.2"),
        ),
        (
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36 OPR/106.0.0.0",
            "Opera",
            Some("106.0.0.0"),
        ),
        (
            "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_6) AppleWebKit/537.36 (KHTML, like Gecko) Brave Chrome/86.0.4240.198 Safari/537.36",
            "Brave",
            None,
        ),
        (
            "Mozilla/5.0 (Windows NT 6.1; Trident/7.0; rv:11.0) like Gecko",
            "Internet Explorer",
            Some("11.0"),
        ),
        ("curl/8.5.0", "Other", None),
        ("", "Other", None),
    ];

    #[test]
    fn families() {
        for (user_agent, family, version) in USER_AGENTS {
            assert_eq!(
                parse(user_agent),
                Browser {
                    family: *family,
                    version: *version,
                },
                "{user_agent}"
            );
        }
    }
}
