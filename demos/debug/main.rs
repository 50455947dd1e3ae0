//! Pathsect debug runner: prints intersections and extents for a few
//! sample layouts, with kernel logging turned on.
//!
//! Usage:
//! ```text
//! cargo run --example debug --features tracing                 # all patterns
//! cargo run --example debug --features tracing -- circles      # one pattern
//! RUST_LOG=pathsect=debug cargo run --example debug --features tracing
//! ```

use pathsect::operations::modification::BreakAtPoint;
use pathsect::operations::query::PathIntersect;
use pathsect::{
    intersect, model_extents, path_extents, path_length, Arc, Circle, Line, Model, Path, Point2,
    Result,
};

const PATTERNS: &[(&str, fn() -> Result<()>)] = &[
    ("lines", lines),
    ("circles", circles),
    ("arcs", arcs),
    ("model", model),
];

fn main() -> Result<()> {
    // Default: WARN for everything, INFO for pathsect.
    // Override with RUST_LOG env var (e.g. RUST_LOG=pathsect=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("pathsect=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let selected = std::env::args().nth(1);
    for (name, run) in PATTERNS {
        if selected.as_deref().is_none_or(|s| s == *name) {
            println!("── {name} ──");
            run()?;
        }
    }
    Ok(())
}

fn show(label: &str, a: &Path, b: &Path) {
    match intersect(a, b, false) {
        Some(hit) => {
            println!("{label}: {} point(s)", hit.points.len());
            for p in &hit.points {
                println!("    ({:.4}, {:.4})", p.x, p.y);
            }
            if let Some(angles) = &hit.angles1 {
                println!("    angles on first:  {angles:?}");
            }
            if let Some(angles) = &hit.angles2 {
                println!("    angles on second: {angles:?}");
            }
        }
        None => println!("{label}: none"),
    }
    let deep = PathIntersect::new(a, b).deep(true).execute();
    println!("    deep: {}", deep.map_or(0, |hit| hit.points.len()));
}

fn lines() -> Result<()> {
    let cross: Path = Line::new(Point2::new(0.0, 0.0), Point2::new(10.0, 10.0))?.into();
    let other: Path = Line::new(Point2::new(0.0, 10.0), Point2::new(10.0, 0.0))?.into();
    show("crossing", &cross, &other);

    let a: Path = Line::new(Point2::new(0.0, 0.0), Point2::new(5.0, 0.0))?.into();
    let b: Path = Line::new(Point2::new(3.0, 0.0), Point2::new(8.0, 0.0))?.into();
    show("collinear overlap", &a, &b);

    let touch: Path = Line::new(Point2::new(5.0, 0.0), Point2::new(5.0, 5.0))?.into();
    show("endpoint touch", &a, &touch);
    Ok(())
}

fn circles() -> Result<()> {
    let c1: Path = Circle::new(Point2::origin(), 5.0)?.into();
    let secant: Path = Circle::new(Point2::new(6.0, 0.0), 5.0)?.into();
    let tangent: Path = Circle::new(Point2::new(10.0, 0.0), 5.0)?.into();
    let inner: Path = Circle::new(Point2::new(1.0, 0.0), 1.0)?.into();
    show("secant", &c1, &secant);
    show("exterior tangent", &c1, &tangent);
    show("nested", &c1, &inner);

    let chord: Path = Line::new(Point2::new(-10.0, 3.0), Point2::new(10.0, 3.0))?.into();
    show("chord", &c1, &chord);
    Ok(())
}

fn arcs() -> Result<()> {
    let quarter: Path = Arc::new(Point2::origin(), 5.0, 0.0, 90.0)?.into();
    let right: Path = Circle::new(Point2::new(6.0, 0.0), 5.0)?.into();
    let left: Path = Circle::new(Point2::new(-6.0, 0.0), 5.0)?.into();
    show("arc / right circle", &quarter, &right);
    show("arc / left circle", &quarter, &left);

    let e = path_extents(&quarter);
    println!("quarter extents: {:?} .. {:?}", e.low, e.high);
    println!("quarter length: {:.6}", path_length(&quarter));

    let (first, second) = BreakAtPoint::new(&quarter, Point2::new(0.0, 5.0)).execute()?;
    println!("break at end: {first:?} / {second:?}");
    Ok(())
}

fn model() -> Result<()> {
    let wheel = Model::new()
        .with_origin(Point2::new(10.0, 0.0))
        .with_path("rim", Circle::new(Point2::origin(), 2.0)?);
    let frame = Model::new()
        .with_origin(Point2::new(0.0, 5.0))
        .with_path("bar", Line::new(Point2::origin(), Point2::new(10.0, 0.0))?)
        .with_model("wheel", wheel);

    frame.walk_paths(|id, path, offset| {
        println!("{id}: {:?} at offset ({}, {})", path.kind(), offset.x, offset.y);
    });
    match model_extents(&frame) {
        Some(e) => println!("extents: {:?} .. {:?} ({} x {})", e.low, e.high, e.width(), e.height()),
        None => println!("extents: empty"),
    }
    Ok(())
}
