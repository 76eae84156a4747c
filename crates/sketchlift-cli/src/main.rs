//! sketchlift CLI - convert captured drawings into 3D models
//!
//! Reads the capture layer's stroke JSON, runs the stroke-to-solid
//! pipeline, and writes the resulting solid as binary STL.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use sketchlift::{convert_drawing, fit_camera, MeshBackend, Model};
use sketchlift::sketchlift_extrude::ExtrudeSettings;
use sketchlift_ink::Drawing;

#[derive(Parser)]
#[command(name = "sketchlift")]
#[command(about = "Convert captured 2D drawings into extruded 3D models", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Display information about a captured drawing
    Info {
        /// Path to the stroke JSON file
        file: PathBuf,
    },
    /// Convert a captured drawing to a binary STL file
    Convert {
        /// Input stroke JSON file
        input: PathBuf,
        /// Output STL file
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Info { file } => show_info(&file),
        Commands::Convert { input, output } => convert_file(&input, &output),
    }
}

fn load_drawing(path: &PathBuf) -> Result<Drawing> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    Drawing::from_json(&json).with_context(|| format!("failed to parse {}", path.display()))
}

fn show_info(file: &PathBuf) -> Result<()> {
    let drawing = load_drawing(file)?;

    println!("Strokes: {}", drawing.strokes.len());
    println!("Points:  {}", drawing.point_count());
    for (i, stroke) in drawing.strokes.iter().enumerate() {
        println!(
            "  [{i}] {} points, color {}, width {}",
            stroke.len(),
            stroke.color,
            stroke.width
        );
    }
    if let Some(bbox) = drawing.bounding_box() {
        println!(
            "Bounds:  ({:.1}, {:.1}) - ({:.1}, {:.1}) px",
            bbox.min.x, bbox.min.y, bbox.max.x, bbox.max.y
        );
    }

    Ok(())
}

fn convert_file(input: &PathBuf, output: &PathBuf) -> Result<()> {
    let drawing = load_drawing(input)?;

    let model = convert_drawing(&drawing, &MeshBackend, &ExtrudeSettings::default())?;
    let solid = match &model.solid {
        Some(solid) => solid,
        None => anyhow::bail!("drawing produced no solid (first stroke has too few points)"),
    };

    let stl_bytes = export_stl_bytes(&solid.mesh.vertices, &solid.mesh.indices);
    fs::write(output, stl_bytes)
        .with_context(|| format!("failed to write {}", output.display()))?;
    println!(
        "Exported {} triangles to {}",
        solid.mesh.num_triangles(),
        output.display()
    );
    report_framing(&model);

    Ok(())
}

fn report_framing(model: &Model) {
    if let Some(pose) = fit_camera(model) {
        println!(
            "Suggested camera: ({:.2}, {:.2}, {:.2}) looking at ({:.2}, {:.2}, {:.2})",
            pose.position.x,
            pose.position.y,
            pose.position.z,
            pose.target.x,
            pose.target.y,
            pose.target.z
        );
    }
}

fn export_stl_bytes(vertices: &[f32], indices: &[u32]) -> Vec<u8> {
    let num_triangles = indices.len() / 3;
    let mut data = Vec::with_capacity(84 + num_triangles * 50);

    // 80-byte header
    data.extend_from_slice(
        b"sketchlift STL export                                                           ",
    );
    // Number of triangles
    data.extend_from_slice(&(num_triangles as u32).to_le_bytes());

    for tri in indices.chunks(3) {
        let i0 = tri[0] as usize * 3;
        let i1 = tri[1] as usize * 3;
        let i2 = tri[2] as usize * 3;

        let v0 = [vertices[i0], vertices[i0 + 1], vertices[i0 + 2]];
        let v1 = [vertices[i1], vertices[i1 + 1], vertices[i1 + 2]];
        let v2 = [vertices[i2], vertices[i2 + 1], vertices[i2 + 2]];

        // Compute facet normal
        let e1 = [v1[0] - v0[0], v1[1] - v0[1], v1[2] - v0[2]];
        let e2 = [v2[0] - v0[0], v2[1] - v0[1], v2[2] - v0[2]];
        let nx = e1[1] * e2[2] - e1[2] * e2[1];
        let ny = e1[2] * e2[0] - e1[0] * e2[2];
        let nz = e1[0] * e2[1] - e1[1] * e2[0];
        let len = (nx * nx + ny * ny + nz * nz).sqrt();
        let (nx, ny, nz) = if len > 1e-10 {
            (nx / len, ny / len, nz / len)
        } else {
            (0.0, 0.0, 1.0)
        };

        data.extend_from_slice(&nx.to_le_bytes());
        data.extend_from_slice(&ny.to_le_bytes());
        data.extend_from_slice(&nz.to_le_bytes());
        for v in [v0, v1, v2] {
            data.extend_from_slice(&v[0].to_le_bytes());
            data.extend_from_slice(&v[1].to_le_bytes());
            data.extend_from_slice(&v[2].to_le_bytes());
        }
        // Attribute byte count
        data.extend_from_slice(&0u16.to_le_bytes());
    }

    data
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stl_layout() {
        // One triangle in the XY plane.
        let vertices = [0.0f32, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0];
        let indices = [0u32, 1, 2];
        let bytes = export_stl_bytes(&vertices, &indices);
        assert_eq!(bytes.len(), 84 + 50);
        assert_eq!(u32::from_le_bytes(bytes[80..84].try_into().unwrap()), 1);
        // Facet normal is +Z.
        let nz = f32::from_le_bytes(bytes[92..96].try_into().unwrap());
        assert!((nz - 1.0).abs() < 1e-6);
    }
}
