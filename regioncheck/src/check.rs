use common::config::{Config, ConfigStatus, OutputFormat};
use common::error::MultiError;
use geom::{Point, Region};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;

/// Named regions, iterated in name order
pub type Regions = BTreeMap<String, Region>;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Verdict {
    pub region: String,
    pub x: f64,
    pub y: f64,
    pub inside: bool,
}

/// Parses `x,y`, whitespace around either number is allowed
pub fn parse_point(s: &str) -> Result<Point, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("invalid point `{}`: expected x,y", s))?;
    let x: f64 = x
        .trim()
        .parse()
        .map_err(|e| format!("invalid x in point `{}`: {}", s, e))?;
    let y: f64 = y
        .trim()
        .parse()
        .map_err(|e| format!("invalid y in point `{}`: {}", s, e))?;
    Ok(Point::new(x, y))
}

/// Pushes every non-finite vertex into `errors`
pub fn validate_regions(regions: &Regions, errors: &mut MultiError<String>) {
    for (name, region) in regions {
        for (i, p) in region.iter().enumerate() {
            if !p.is_finite() {
                errors.push(format!("region {}: vertex {} {} is not finite", name, i, p));
            }
        }
    }
}

/// Gathers the query points from the `--point` arguments followed by the points of the
/// queries file (`file_name` is only used in messages).
///
/// Every unparsable argument, non-finite point and non-finite region vertex is reported, each
/// query named by its position among the arguments or in the file.
pub fn collect_queries(
    regions: &Regions,
    args: &[String],
    file: Option<(&str, Vec<Point>)>,
) -> Result<Vec<Point>, MultiError<String>> {
    let mut errors = MultiError::new();
    validate_regions(regions, &mut errors);

    let mut queries = Vec::with_capacity(args.len());

    for (i, s) in args.iter().enumerate() {
        match parse_point(s) {
            Ok(p) if p.is_finite() => queries.push(p),
            Ok(p) => errors.push(format!("--point {}: {} is not finite", i, p)),
            Err(e) => errors.push(format!("--point {}: {}", i, e)),
        }
    }

    if let Some((file_name, points)) = file {
        for (i, p) in points.into_iter().enumerate() {
            if p.is_finite() {
                queries.push(p);
            } else {
                errors.push(format!("{}[{}]: {} is not finite", file_name, i, p));
            }
        }
    }

    errors.into_result(queries)
}

/// What to log about the config file once the logger is up
pub fn describe_config(path: &Path, status: &ConfigStatus) -> (log::Level, String) {
    match status {
        ConfigStatus::Loaded => (log::Level::Info, format!("using config {}", path.display())),
        ConfigStatus::Missing => (
            log::Level::Info,
            format!("no config at {}, using defaults", path.display()),
        ),
        ConfigStatus::Invalid(e) => (
            log::Level::Error,
            format!("invalid config {}: {}, using defaults", path.display(), e),
        ),
    }
}

/// `--json` wins over the configured format
pub fn output_format(json: bool, config: &Config) -> OutputFormat {
    if json {
        OutputFormat::Json
    } else {
        config.output
    }
}

pub fn verdicts(regions: &Regions, queries: &[Point]) -> Vec<Verdict> {
    let mut v = Vec::with_capacity(regions.len() * queries.len());
    for (name, region) in regions {
        if region.len() < 3 {
            log::warn!(
                "region {} has {} vertices and cannot contain any point",
                name,
                region.len()
            );
        }
        for &p in queries {
            v.push(Verdict {
                region: name.clone(),
                x: p.x,
                y: p.y,
                inside: region.contains(p),
            });
        }
    }
    v
}

pub fn render_text(verdicts: &[Verdict]) -> String {
    let mut s = String::new();
    for v in verdicts {
        s += &format!(
            "{} {}: {}\n",
            v.region,
            Point::new(v.x, v.y),
            if v.inside { "inside" } else { "outside" }
        );
    }
    s
}

pub fn summary(name: &str, region: &Region) -> String {
    let bbox = match region.bbox() {
        Some(b) => format!("bbox {} {}", b.ll, b.ur),
        None => "empty".to_string(),
    };
    let winding = if region.len() < 3 {
        "degenerate"
    } else if region.is_clockwise() {
        "clockwise"
    } else {
        "counter-clockwise"
    };
    format!(
        "{}: {} vertices, {}, area {}, {}",
        name,
        region.len(),
        bbox,
        region.area(),
        winding
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use geom::point;

    fn regions() -> Regions {
        let mut r = Regions::new();
        r.insert(
            "square".to_string(),
            serde_json::from_str("[[0,0],[4,0],[4,4],[0,4]]").unwrap(),
        );
        r.insert(
            "line".to_string(),
            serde_json::from_str("[[0,0],[2,0]]").unwrap(),
        );
        r
    }

    #[test]
    fn test_parse_point() {
        assert_eq!(parse_point("1,2"), Ok(point(1.0, 2.0)));
        assert_eq!(parse_point(" -0.5 , 3e2"), Ok(point(-0.5, 300.0)));
        assert!(parse_point("1;2").is_err());
        assert!(parse_point("a,2").is_err());
        assert!(parse_point("1,").is_err());
    }

    fn args(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_collect_queries_reports_everything() {
        let mut r = regions();
        r.insert(
            "bad".to_string(),
            Region::new(vec![point(0.0, 0.0), point(f64::NAN, 1.0)]),
        );

        let errors = collect_queries(
            &r,
            &args(&["1,1", "x,1", "inf,2"]),
            Some((
                "queries.json",
                vec![point(2.0, 2.0), point(0.0, f64::NEG_INFINITY)],
            )),
        )
        .unwrap_err();

        assert_eq!(errors.0.len(), 4, "{}", errors);
        assert!(errors.0[0].starts_with("region bad: vertex 1"), "{}", errors);
        assert!(errors.0[1].starts_with("--point 1: invalid x"), "{}", errors);
        assert!(errors.0[2].starts_with("--point 2: P(inf, 2)"), "{}", errors);
        assert!(errors.0[3].starts_with("queries.json[1]:"), "{}", errors);
    }

    #[test]
    fn test_collect_queries_ok() {
        let q = collect_queries(
            &regions(),
            &args(&["1,1", "-2, 0.5"]),
            Some(("queries.json", vec![point(3.0, 3.0)])),
        )
        .unwrap();
        assert_eq!(q, vec![point(1.0, 1.0), point(-2.0, 0.5), point(3.0, 3.0)]);

        assert_eq!(collect_queries(&regions(), &[], None).unwrap(), vec![]);
    }

    #[test]
    fn test_output_format() {
        let mut config = Config::default();
        assert_eq!(output_format(false, &config), OutputFormat::Text);
        assert_eq!(output_format(true, &config), OutputFormat::Json);

        config.output = OutputFormat::Json;
        assert_eq!(output_format(false, &config), OutputFormat::Json);
    }

    #[test]
    fn test_describe_config() {
        let path = Path::new("regioncheck.json");

        let (level, msg) = describe_config(path, &ConfigStatus::Missing);
        assert_eq!(level, log::Level::Info);
        assert_eq!(msg, "no config at regioncheck.json, using defaults");

        let (level, _) = describe_config(path, &ConfigStatus::Loaded);
        assert_eq!(level, log::Level::Info);

        let (level, msg) = describe_config(path, &ConfigStatus::Invalid("eof".to_string()));
        assert_eq!(level, log::Level::Error);
        assert!(msg.contains("eof"), "{}", msg);
    }

    #[test]
    fn test_verdicts_sorted_by_region() {
        let v = verdicts(&regions(), &[point(2.0, 2.0), point(4.0, 2.0)]);
        let got: Vec<_> = v.iter().map(|v| (v.region.as_str(), v.inside)).collect();
        assert_eq!(
            got,
            vec![
                ("line", false),
                ("line", false),
                ("square", true),
                ("square", false)
            ]
        );
    }

    #[test]
    fn test_render_text() {
        let v = verdicts(&regions(), &[point(2.0, 0.0)]);
        assert_eq!(
            render_text(&v),
            "line P(2, 0): outside\nsquare P(2, 0): inside\n"
        );
    }

    #[test]
    fn test_verdict_json() {
        let v = Verdict {
            region: "square".to_string(),
            x: 1.0,
            y: 2.5,
            inside: true,
        };
        assert_eq!(
            serde_json::to_string(&v).unwrap(),
            r#"{"region":"square","x":1.0,"y":2.5,"inside":true}"#
        );
    }

    #[test]
    fn test_summary() {
        let r = regions();
        assert_eq!(
            summary("square", &r["square"]),
            "square: 4 vertices, bbox P(0, 0) P(4, 4), area 16, counter-clockwise"
        );
        assert_eq!(
            summary("empty", &Region::default()),
            "empty: 0 vertices, empty, area 0, degenerate"
        );
    }
}
