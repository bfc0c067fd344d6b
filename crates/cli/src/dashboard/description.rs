pub const TITLE: &str = "Optimal bid price";

pub const DESCRIPTION: &[&str] = &[
    "Picks the bid price to send to an auction so that the expected net revenue \
     for a given advertiser pay is as high as possible.",
    "",
    "Expected payoff (bid value)",
    "  (advertiser pay - bid price) x win rate of that bid price",
    "",
    "Optimal bid price",
    "  the bid price with the highest expected payoff; among equal payoffs the \
     lowest bid price is chosen.",
    "",
    "Assumptions",
    "  1. First price auction: the highest bidder wins and pays its bid.",
    "  2. Revenue is only made on won auctions bid below the advertiser pay.",
    "  3. Historical win rates are representative and do not depend on how often \
     a price was bid.",
    "",
    "Keys",
    "  up/down  choose advertiser pay",
    "  enter    determine optimal bid price",
    "  d        toggle this panel",
    "  q/esc    quit",
];
