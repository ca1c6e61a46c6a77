//! # Bridge Girder CLI
//!
//! Terminal front-end for the plate girder design engine. Prompts for
//! the few key parameters, runs the full design, and prints a summary
//! plus the complete JSON report.

use std::io::{self, BufRead, Write};

use bridge_core::codes::CodeRegistry;
use bridge_core::design::{design_plate_girder, PlateGirderInput};
use bridge_core::materials::SteelGrade;

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default)
}

fn prompt_string(prompt: &str, default: &str) -> String {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default.to_string();
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default.to_string();
    }

    let trimmed = input.trim();
    if trimmed.is_empty() {
        default.to_string()
    } else {
        trimmed.to_uppercase()
    }
}

fn status_icon(ok: bool) -> &'static str {
    if ok {
        "OK"
    } else {
        "NG"
    }
}

fn main() {
    println!("Plate Girder Bridge Designer");
    println!("============================");
    println!("Design codes: {}", CodeRegistry::standard().list().join(", "));
    println!();

    let span_m = prompt_f64("Effective span (m) [30.0]: ", 30.0);
    let spacing_m = prompt_f64("Girder spacing (m) [3.0]: ", 3.0);
    let num_girders = prompt_f64("Number of girders [2]: ", 2.0) as u32;
    let vehicle = prompt_string("Live load class (CLASS_A/CLASS_70R/CLASS_AA) [CLASS_A]: ", "CLASS_A");
    let grade_code = prompt_string("Steel grade (E250A/E350/...) [E250A]: ", "E250A");

    let mut input = PlateGirderInput::new("CLI Demo", "Demo Bridge", span_m * 1000.0, spacing_m * 1000.0);
    input.num_girders = num_girders;
    input.live_load_class = vehicle;
    input.steel_grade = SteelGrade::from_code(&grade_code).unwrap_or_default();

    println!();
    println!("Designing {:.0} m span with {} loading...", span_m, input.live_load_class);
    println!();

    match design_plate_girder(&input) {
        Ok(report) => {
            let dims = &report.initial_dimensions;
            let sec = &report.section_properties;
            let ff = &report.factored_forces;
            let util = &report.utilization;

            println!("=======================================");
            println!("  PLATE GIRDER DESIGN RESULTS");
            println!("=======================================");
            println!();
            println!("Section ({:?} sizing):", report.sizing_method);
            println!("  Web:    {:.0} x {:.0} mm", dims.web_depth_mm, dims.web_thickness_mm);
            println!("  Flange: {:.0} x {:.0} mm", dims.flange_width_mm, dims.flange_thickness_mm);
            println!("  Class:  {}", sec.section_class);
            println!("  Weight: {:.2} kN/m", report.weight_per_meter_kn);
            println!();
            println!("Factored demand (ULS):");
            println!("  M_Ed = {:.0} kNm", ff.factored_moment_knm);
            println!("  V_Ed = {:.0} kN", ff.factored_shear_kn);
            println!();
            println!("Capacity checks:");
            println!(
                "  Moment:     {:.2} ({:.0}/{:.0} kNm) {}",
                util.moment_ratio,
                ff.factored_moment_knm,
                report.moment_capacity.governing_capacity_knm,
                status_icon(util.moment_ratio <= 1.0)
            );
            println!(
                "  Shear:      {:.2} ({:.0}/{:.0} kN) {}",
                util.shear_ratio,
                ff.factored_shear_kn,
                report.shear_capacity.design_capacity_kn,
                status_icon(util.shear_ratio <= 1.0)
            );
            println!(
                "  Deflection: {:.1}/{:.1} mm {}",
                report.deflection.total_deflection_mm,
                report.deflection.allowable_deflection_mm,
                status_icon(report.deflection.deflection_ok)
            );
            println!();
            for warning in &report.warnings {
                println!("Warning: {}", warning);
            }
            for error in &report.errors {
                println!("Error: {}", error);
            }
            println!();
            println!("=======================================");
            println!("  RESULT: {}", util.status);
            println!("=======================================");

            println!();
            println!("JSON Report:");
            if let Ok(json) = serde_json::to_string_pretty(&report) {
                println!("{}", json);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
            std::process::exit(1);
        }
    }
}
