use argh::FromArgs;
use serde::Serialize;

use linlab::algebra::{Mat2F64, Mat3F64, Vec2F64, Vec3F64};
use linlab::eigen::{
    presets::{PRESETS_2D, PRESETS_3D},
    scene::Scene,
    Analysis, Scene2, Scene3, SquareMatrix,
};

#[derive(FromArgs)]
/// Analyze a 2x2 or 3x3 linear transformation
struct Args {
    /// matrix dimension, 2 or 3
    #[argh(option, short = 'd', default = "2")]
    dim: usize,

    /// matrix entries in row-major order, comma separated
    #[argh(option, short = 'm')]
    matrix: Option<String>,

    /// name of a preset matrix
    #[argh(option, short = 'p')]
    preset: Option<String>,

    /// scalar multiplier applied to the matrix
    #[argh(option, short = 'k', default = "1.0")]
    scalar: f64,

    /// drag a vector: index followed by the target coordinates, comma separated
    #[argh(option)]
    drag: Option<String>,

    /// transpose the matrix before analyzing it
    #[argh(switch, short = 't')]
    transpose: bool,

    /// list the preset names and exit
    #[argh(switch)]
    list_presets: bool,

    /// print the report as json
    #[argh(switch)]
    json: bool,
}

#[derive(Serialize)]
struct Report<'a, V> {
    scalar: f64,
    char_equation: String,
    analysis: &'a Analysis<V>,
    vectors: Vec<VectorReport<'a, V>>,
}

#[derive(Serialize)]
struct VectorReport<'a, V> {
    label: &'a str,
    vector: V,
    image: V,
}

fn parse_values(text: &str) -> Result<Vec<f64>, Box<dyn std::error::Error>> {
    let values = text
        .split(',')
        .map(|s| s.trim().parse::<f64>())
        .collect::<Result<Vec<_>, _>>()?;
    Ok(values)
}

fn parse_drag(text: &str, dim: usize) -> Result<(usize, Vec<f64>), Box<dyn std::error::Error>> {
    let (index, coords) = text.split_once(',').ok_or("expected index,x,y[,z]")?;
    let coords = parse_values(coords)?;
    if coords.len() != dim {
        return Err(format!("expected {dim} drag coordinates, got {}", coords.len()).into());
    }
    Ok((index.trim().parse()?, coords))
}

fn print_report<M>(scene: &Scene<M>, json: bool) -> Result<(), Box<dyn std::error::Error>>
where
    M: SquareMatrix,
    M::Vector: Serialize,
{
    let analysis = scene.analyze();
    let images = scene.transformed_vectors();

    let report = Report {
        scalar: scene.scalar,
        char_equation: analysis.char_poly.to_string(),
        analysis: &analysis,
        vectors: scene
            .vectors
            .iter()
            .zip(images)
            .map(|(v, image)| VectorReport {
                label: &v.label,
                vector: v.vector,
                image,
            })
            .collect(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("matrix: {:?}", scene.effective_matrix());
    println!("det = {:.4}", analysis.invariants.determinant);
    println!("trace = {:.4}", analysis.invariants.trace);
    println!("{}", report.char_equation);

    if analysis.has_real_eigenvalues() {
        for pair in &analysis.eigenpairs {
            println!(
                "λ = {:.4}, v = {:?} ({})",
                pair.eigenvalue,
                pair.eigenvector,
                pair.color.color()
            );
        }
    } else {
        println!("no real eigenvalues");
    }

    for v in &report.vectors {
        println!("{}: {:?} -> {:?}", v.label, v.vector, v.image);
    }

    Ok(())
}

fn run_2d(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let mut scene = Scene2 {
        scalar: args.scalar,
        ..Default::default()
    };

    if let Some(name) = &args.preset {
        scene.apply_preset(name)?;
    }

    if let Some(entries) = &args.matrix {
        let e = parse_values(entries)?;
        if e.len() != 4 {
            return Err(format!("expected 4 matrix entries, got {}", e.len()).into());
        }
        scene.matrix = Mat2F64::from_rows([[e[0], e[1]], [e[2], e[3]]]);
    }

    if args.transpose {
        scene.transpose_matrix();
    }

    if let Some(drag) = &args.drag {
        let (index, c) = parse_drag(drag, 2)?;
        let v = scene.drag_vector(index, Vec2F64::new(c[0], c[1]))?;
        log::info!("vector {index} dragged to pre-image {v:?}");
    }

    print_report(&scene, args.json)
}

fn run_3d(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let mut scene = Scene3 {
        scalar: args.scalar,
        ..Default::default()
    };

    if let Some(name) = &args.preset {
        scene.apply_preset(name)?;
    }

    if let Some(entries) = &args.matrix {
        let e = parse_values(entries)?;
        if e.len() != 9 {
            return Err(format!("expected 9 matrix entries, got {}", e.len()).into());
        }
        scene.matrix = Mat3F64::from_rows([
            [e[0], e[1], e[2]],
            [e[3], e[4], e[5]],
            [e[6], e[7], e[8]],
        ]);
    }

    if args.transpose {
        scene.transpose_matrix();
    }

    if let Some(drag) = &args.drag {
        let (index, c) = parse_drag(drag, 3)?;
        let v = scene.drag_vector(index, Vec3F64::new(c[0], c[1], c[2]))?;
        log::info!("vector {index} dragged to pre-image {v:?}");
    }

    print_report(&scene, args.json)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    if args.list_presets {
        match args.dim {
            3 => PRESETS_3D.iter().for_each(|p| println!("{}", p.name)),
            _ => PRESETS_2D.iter().for_each(|p| println!("{}", p.name)),
        }
        return Ok(());
    }

    match args.dim {
        2 => run_2d(&args),
        3 => run_3d(&args),
        dim => Err(format!("unsupported dimension {dim}, expected 2 or 3").into()),
    }
}
