//! The built-in source catalog, used when no catalog file is configured.

use super::{Category, Source, SourceCatalog};

pub const DEFAULT_CATEGORY: &str = "news";

const BASIC_INTELLIGENCE: &[(&str, &str)] = &[
    // Technology and science media
    ("Wired", "https://www.wired.com/feed/rss"),
    ("Ars Technica", "http://feeds.arstechnica.com/arstechnica/index"),
    ("MIT Technology Review", "https://www.technologyreview.com/feed"),
    ("IEEE Spectrum", "https://spectrum.ieee.org/feeds/feed.rss"),
    // Venture capital and startups
    ("TechCrunch", "https://techcrunch.com/feed/"),
    ("Crunchbase News", "https://news.crunchbase.com/feed"),
    (
        "PrNewswire Telecommunications",
        "https://www.prnewswire.com/rss/telecommunications-latest-news/telecommunications-latest-news-list.rss",
    ),
    (
        "PrNewswire Consumer Technology",
        "https://www.prnewswire.com/rss/consumer-technology-latest-news/consumer-technology-latest-news-list.rss",
    ),
    (
        "PrNewswire Business Technology",
        "https://www.prnewswire.com/rss/business-technology-latest-news/business-technology-latest-news-list.rss",
    ),
    // Markets
    ("Investing.com - All News", "https://www.investing.com/rss/news.rss"),
    ("Investing.com - Stock Market", "https://www.investing.com/rss/news_25.rss"),
    ("Bloomberg - Technology", "https://feeds.bloomberg.com/technology/news.rss"),
];

const AI: &[(&str, &str)] = &[
    ("Google Research Blog", "https://research.google/blog/rss"),
    ("OpenAI Blog", "https://openai.com/blog/rss.xml"),
    ("BAIR Blog", "https://bair.berkeley.edu/blog/feed.xml"),
    ("AWS ML Blog", "https://aws.amazon.com/blogs/machine-learning/feed/"),
    ("ML Mastery", "https://machinelearningmastery.com/blog/feed/"),
    ("MarkTechPost", "https://www.marktechpost.com/feed"),
    ("Unite.AI", "https://unite.ai/feed"),
    ("VentureBeat - AI", "https://venturebeat.com/category/ai/feed/"),
    ("Ars Technica - AI", "https://arstechnica.com/ai/feed"),
    (
        "MIT Tech Review - AI",
        "https://www.technologyreview.com/topic/artificial-intelligence/feed/",
    ),
];

const ROBOTICS: &[(&str, &str)] = &[
    ("arXiv - Robotics", "https://rss.arxiv.org/rss/cs.RO"),
    ("The Robot Report", "https://www.therobotreport.com/feed"),
    ("Robohub", "https://robohub.org/feed"),
    ("Robotics & Automation News", "https://roboticsandautomationnews.com/feed/"),
    ("IEEE Spectrum - Robotics", "https://spectrum.ieee.org/feeds/topic/robotics.rss"),
    (
        "ScienceDaily - Robotics",
        "https://www.sciencedaily.com/rss/computers_math/robotics.xml",
    ),
    ("MIT News - AI", "https://news.mit.edu/topic/mitartificial-intelligence2-rss.xml"),
    ("MIT News - Robotics", "https://news.mit.edu/topic/mitrobotics-rss.xml"),
];

const AUTONOMOUS_DRIVING: &[(&str, &str)] = &[
    (
        "Guardian - Self-driving",
        "https://www.theguardian.com/technology/self-driving-cars/rss",
    ),
    ("Medium - Self Driving", "https://medium.com/feed/self-driving-cars"),
    ("InsideEVs - Autonomous", "https://insideevs.com/rss/category/autonomous-vehicles/"),
    ("TAS", "https://tas.ac.uk/feeds/"),
    ("NVIDIA Newsroom", "https://nvidianews.nvidia.com/feed/"),
];

const CHINESE_TECH: &[(&str, &str)] = &[
    ("36kr", "https://36kr.com/feed"),
    (
        "量子位",
        "https://wechat2rss.xlab.app/feed/7131b577c61365cb47e81000738c10d872685908.xml",
    ),
    (
        "新智元",
        "https://wechat2rss.xlab.app/feed/ede30346413ea70dbef5d485ea5cbb95cca446e7.xml",
    ),
    (
        "机器之心",
        "https://wechat2rss.xlab.app/feed/51e92aad2728acdd1fda7314be32b16639353001.xml",
    ),
    (
        "人形机器人发布",
        "https://raw.githubusercontent.com/osnsyc/Wechat-Scholar/main/channels/gh_3d2d45a5f9f1.xml",
    ),
    (
        "深科技",
        "https://raw.githubusercontent.com/osnsyc/Wechat-Scholar/main/channels/gh_27c43c799b0c.xml",
    ),
];

fn category(name: &str, sources: &[(&str, &str)]) -> Category {
    Category::new(
        name,
        sources
            .iter()
            .map(|(name, url)| Source::new(*name, *url))
            .collect(),
    )
}

/// The daily news selection: the Chinese tech feeds plus a few
/// English-language picks.
fn news() -> Category {
    let mut news = category("news", CHINESE_TECH);
    news.sources.extend([
        Source::new("TechCrunch", "https://techcrunch.com/feed/"),
        Source::new(
            "MIT Tech Review - AI",
            "https://www.technologyreview.com/topic/artificial-intelligence/feed/",
        ),
        Source::new(
            "PrNewswire Telecommunications",
            "https://www.prnewswire.com/rss/telecommunications-latest-news/telecommunications-latest-news-list.rss",
        ),
    ]);
    news
}

pub fn catalog() -> SourceCatalog {
    SourceCatalog::new(vec![
        category("basic-intelligence", BASIC_INTELLIGENCE),
        category("ai", AI),
        category("robotics", ROBOTICS),
        category("autonomous-driving", AUTONOMOUS_DRIVING),
        category("chinese-tech", CHINESE_TECH),
        news(),
    ])
    .with_default_category(DEFAULT_CATEGORY)
}
