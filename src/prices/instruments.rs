/// The fixed dashboard instrument table: human-readable name to Yahoo ticker,
/// in fetch order.
///
/// Several names intentionally map to the same ticker (the dashboard shows
/// them as separate rows), and "Risk Sentiment" uses the bare `VIX` symbol
/// the original table shipped with.
pub const DEFAULT_INSTRUMENTS: &[(&str, &str)] = &[
    ("Bonds", "^TYX"),                 // 30-year treasury yield
    ("US Treasury Yields", "^TNX"),    // 10-year treasury yield
    ("US 10-Year Yield", "^TNX"),      // 10-year treasury yield
    ("Federal Funds Rate", "^IRX"),    // 13-week treasury bill
    ("USD Index", "DX-Y.NYB"),
    ("Gold", "GC=F"),
    ("Crude Oil", "CL=F"),
    ("Commodities", "GSG"),            // S&P GSCI commodity trust
    ("Copper Prices", "HG=F"),
    ("VIX (Volatility Index)", "^VIX"),
    ("S&P 500", "SPY"),
    ("Growth Stocks", "IWF"),          // Russell 1000 growth
    ("Value Stocks", "IWD"),           // Russell 1000 value
    ("US Multinational Companies", "XLK"),
    ("AUD/USD", "AUDUSD=X"),
    ("NZD/AUD", "NZDAUD=X"),
    ("CAD", "CADUSD=X"),
    ("NOK (Norwegian Krone)", "NOKUSD=X"),
    ("CHF (Swiss Franc)", "CHFUSD=X"),
    ("Emerging Market Currencies", "CEW"),
    ("TIPS (Treasury Inflation-Protected Securities)", "TIP"),
    ("Real Estate", "IYR"),
    ("Stocks", "^GSPC"),
    ("USD/JPY", "JPY=X"),
    ("Inflation", "RINF"),             // inflation expectations ETF
    ("Currency Pair", "EURUSD=X"),
    ("Currency Strength", "DX-Y.NYB"), // USD index as proxy
    ("Risk Sentiment", "VIX"),
];
