//! # Design Requests
//!
//! A [`DesignRequest`] is the full set of parameters a quote form collects;
//! [`evaluate_design`] runs every calculator over it and returns one
//! [`DesignReport`].
//!
//! ## Flow
//!
//! ```text
//! DesignRequest
//!   ├── validate strands ──► invalid? report with no diameters
//!   ├── resolve construction (factors, copper, equivalent AWG)
//!   ├── advisories (strand size)
//!   ├── bare / served: diameters for each requested film build
//!   │     or
//!   │   insulated: diameters + UL + manufacturing warnings per layer count
//!   └── electrical (DC resistance, skin depth, N1 max)
//! ```
//!
//! ## JSON Example
//!
//! Only `strand_count` and `wire_awg` are required:
//!
//! ```json
//! {
//!   "strand_count": 200,
//!   "wire_awg": 36,
//!   "litz_type": "Type 1",
//!   "magnet_wire_grade": "MW 79-C",
//!   "wire_type": "insulated",
//!   "insulation_type": "FEP",
//!   "requested_wall_in": 0.004,
//!   "layers": [1, 2, 3]
//! }
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculations::{
    calculate_bare_diameters, calculate_electrical_properties, calculate_insulated_diameters,
    calculate_insulated_diameters_with_wall, calculate_litz_construction,
    calculate_served_diameters, stranded_copper_area, validate_strand_count, DiameterResult,
    ElectricalProperties, LitzConstruction, ServeType, StrandValidationResult,
};
use crate::errors::{LitzError, LitzResult};
use crate::rules::{
    check_construction_advisories, check_manufacturing_capability, check_ul_approval,
};
use crate::tables::{
    FilmType, InsulationLayers, InsulationType, LitzType, DEFAULT_MAGNET_WIRE_GRADE,
    MAX_CONSTRUCTION_AWG, MIN_CONSTRUCTION_AWG,
};

/// Finished product family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum WireType {
    /// Bare litz, optionally nylon served
    #[default]
    #[serde(rename = "bare")]
    BareServed,
    /// Litz with an extruded fluoropolymer jacket
    #[serde(rename = "insulated")]
    Insulated,
}

impl WireType {
    pub fn display_name(&self) -> &'static str {
        match self {
            WireType::BareServed => "Bare / Served",
            WireType::Insulated => "Insulated",
        }
    }
}

fn default_grade() -> String {
    DEFAULT_MAGNET_WIRE_GRADE.to_string()
}

fn default_films() -> Vec<FilmType> {
    FilmType::ALL.to_vec()
}

fn default_layers() -> Vec<InsulationLayers> {
    InsulationLayers::ALL.to_vec()
}

fn default_temperature() -> f64 {
    20.0
}

fn default_frequency() -> f64 {
    1000.0
}

/// Parameters for one litz design.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignRequest {
    pub strand_count: u32,

    /// Strand gauge, 10 to 50
    pub wire_awg: u32,

    #[serde(default)]
    pub litz_type: LitzType,

    #[serde(default = "default_grade")]
    pub magnet_wire_grade: String,

    #[serde(default)]
    pub wire_type: WireType,

    /// Jacket material, insulated designs only
    #[serde(default)]
    pub insulation_type: InsulationType,

    /// Film builds to size, bare designs only
    #[serde(default = "default_films")]
    pub film_types: Vec<FilmType>,

    /// Layer counts to size, insulated designs only
    #[serde(default = "default_layers")]
    pub layers: Vec<InsulationLayers>,

    /// Customer's per-layer wall, inches. Sized from the bundle when absent.
    #[serde(default)]
    pub requested_wall_in: Option<Decimal>,

    /// Nylon serve over each bare result
    #[serde(default)]
    pub serve_type: Option<ServeType>,

    /// Operating temperature for DC resistance, °C
    #[serde(default = "default_temperature")]
    pub temperature_c: f64,

    /// Frequency for skin depth and N1 max, Hz
    #[serde(default = "default_frequency")]
    pub frequency_hz: f64,
}

impl DesignRequest {
    /// Request with every optional field at its default.
    pub fn new(strand_count: u32, wire_awg: u32) -> Self {
        DesignRequest {
            strand_count,
            wire_awg,
            litz_type: LitzType::default(),
            magnet_wire_grade: default_grade(),
            wire_type: WireType::default(),
            insulation_type: InsulationType::default(),
            film_types: default_films(),
            layers: default_layers(),
            requested_wall_in: None,
            serve_type: None,
            temperature_c: default_temperature(),
            frequency_hz: default_frequency(),
        }
    }

    pub fn from_json(json: &str) -> LitzResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reject parameters outside the engine's domain.
    ///
    /// Strand counts are not checked here; an unbuildable count is a normal
    /// outcome reported in the [`DesignReport`].
    pub fn validate(&self) -> LitzResult<()> {
        if !(MIN_CONSTRUCTION_AWG..=MAX_CONSTRUCTION_AWG).contains(&self.wire_awg) {
            return Err(LitzError::invalid_input(
                "wire_awg",
                self.wire_awg.to_string(),
                format!(
                    "AWG must be between {} and {}",
                    MIN_CONSTRUCTION_AWG, MAX_CONSTRUCTION_AWG
                ),
            ));
        }
        if let Some(wall) = self.requested_wall_in {
            if wall <= Decimal::ZERO {
                return Err(LitzError::invalid_input(
                    "requested_wall_in",
                    wall.to_string(),
                    "Wall thickness must be positive",
                ));
            }
        }
        if !self.temperature_c.is_finite() {
            return Err(LitzError::invalid_input(
                "temperature_c",
                self.temperature_c.to_string(),
                "Temperature must be a finite number",
            ));
        }
        if !self.frequency_hz.is_finite() || self.frequency_hz <= 0.0 {
            return Err(LitzError::invalid_input(
                "frequency_hz",
                self.frequency_hz.to_string(),
                "Frequency must be positive",
            ));
        }
        Ok(())
    }
}

/// Bare (and optionally served) diameters for one film build.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilmDiameters {
    pub film_type: FilmType,
    pub bare: Option<DiameterResult>,
    pub served: Option<DiameterResult>,
    /// Why the build was not sized (not made at this gauge)
    pub skipped: Option<String>,
}

/// Insulated diameters and warnings for one layer count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsulatedDiameters {
    pub layers: InsulationLayers,
    pub diameters: DiameterResult,
    pub ul_warnings: Vec<String>,
    pub manufacturing_warnings: Vec<String>,
}

/// Everything computed for a [`DesignRequest`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignReport {
    pub request: DesignRequest,
    pub validation: StrandValidationResult,
    pub construction: LitzConstruction,
    pub advisories: Vec<String>,
    pub bare: Vec<FilmDiameters>,
    pub insulated: Vec<InsulatedDiameters>,
    pub electrical: Option<ElectricalProperties>,
}

impl DesignReport {
    pub fn is_valid(&self) -> bool {
        self.construction.is_valid
    }

    /// Every UL and manufacturing warning plus the advisories, in report order.
    pub fn all_warnings(&self) -> Vec<&str> {
        let mut warnings: Vec<&str> = self.advisories.iter().map(String::as_str).collect();
        for layer in &self.insulated {
            warnings.extend(layer.ul_warnings.iter().map(String::as_str));
            warnings.extend(layer.manufacturing_warnings.iter().map(String::as_str));
        }
        warnings
    }
}

fn size_film(
    request: &DesignRequest,
    construction: &LitzConstruction,
    film: FilmType,
) -> LitzResult<FilmDiameters> {
    let bare = match calculate_bare_diameters(
        request.strand_count,
        request.wire_awg,
        construction.packing_factor,
        &request.magnet_wire_grade,
        film,
    ) {
        Ok(bare) => bare,
        Err(err @ LitzError::FilmUnavailable { .. }) => {
            return Ok(FilmDiameters {
                film_type: film,
                bare: None,
                served: None,
                skipped: Some(err.to_string()),
            });
        }
        Err(err) => return Err(err),
    };

    let served = request.serve_type.map(|serve| calculate_served_diameters(&bare, serve));
    Ok(FilmDiameters {
        film_type: film,
        bare: Some(bare),
        served,
        skipped: None,
    })
}

fn size_insulated(
    request: &DesignRequest,
    construction: &LitzConstruction,
    layers: InsulationLayers,
) -> LitzResult<InsulatedDiameters> {
    let diameters = match request.requested_wall_in {
        Some(wall) => calculate_insulated_diameters_with_wall(
            request.wire_awg,
            request.insulation_type,
            layers,
            &request.magnet_wire_grade,
            request.strand_count,
            construction.packing_factor,
            wall,
        )?,
        None => calculate_insulated_diameters(
            request.wire_awg,
            request.insulation_type,
            layers,
            &request.magnet_wire_grade,
            request.strand_count,
            construction.packing_factor,
        )?,
    };

    // UL limits apply to the conductor, i.e. the single-build bare bundle
    let conductor = calculate_bare_diameters(
        request.strand_count,
        request.wire_awg,
        construction.packing_factor,
        &request.magnet_wire_grade,
        FilmType::Single,
    )?;

    // UL judges the wall the customer asked for; without one, the sized wall
    let ul_wall = request.requested_wall_in.or(diameters.wall_thickness_inches);
    let ul_warnings = check_ul_approval(
        conductor.nom,
        request.insulation_type,
        construction.total_copper_area_cma,
        ul_wall,
        layers,
    );

    // Same copper basis the minimum-wall rules sized the jacket with
    let stranded = stranded_copper_area(request.strand_count, request.wire_awg)?;
    let manufacturing_warnings = check_manufacturing_capability(
        stranded,
        request.insulation_type,
        request.requested_wall_in,
        layers,
    );

    Ok(InsulatedDiameters {
        layers,
        diameters,
        ul_warnings,
        manufacturing_warnings,
    })
}

/// Evaluate a design request end to end.
///
/// ```rust
/// use litz_core::design::{evaluate_design, DesignRequest};
///
/// let report = evaluate_design(&DesignRequest::new(200, 36)).unwrap();
/// assert!(report.is_valid());
/// assert_eq!(report.bare.len(), 4);
/// ```
pub fn evaluate_design(request: &DesignRequest) -> LitzResult<DesignReport> {
    request.validate()?;

    let validation = validate_strand_count(request.strand_count, request.wire_awg);
    let construction = calculate_litz_construction(
        request.strand_count,
        request.wire_awg,
        request.litz_type,
        &request.magnet_wire_grade,
    )?;

    let mut report = DesignReport {
        request: request.clone(),
        validation,
        construction,
        advisories: Vec::new(),
        bare: Vec::new(),
        insulated: Vec::new(),
        electrical: None,
    };

    if !report.construction.is_valid {
        debug!(
            strand_count = request.strand_count,
            wire_awg = request.wire_awg,
            message = %report.construction.validation_message,
            "design request rejected"
        );
        return Ok(report);
    }

    report.advisories = check_construction_advisories(request.strand_count, request.wire_awg);

    match request.wire_type {
        WireType::BareServed => {
            report.bare = request
                .film_types
                .iter()
                .map(|&film| size_film(request, &report.construction, film))
                .collect::<LitzResult<_>>()?;
        }
        WireType::Insulated => {
            report.insulated = request
                .layers
                .iter()
                .map(|&layers| size_insulated(request, &report.construction, layers))
                .collect::<LitzResult<_>>()?;
        }
    }

    report.electrical = Some(calculate_electrical_properties(
        &report.construction,
        request.temperature_c,
        request.frequency_hz,
    )?);

    debug!(
        strand_count = request.strand_count,
        wire_awg = request.wire_awg,
        wire_type = request.wire_type.display_name(),
        warnings = report.all_warnings().len(),
        "design request evaluated"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_request_defaults_from_json() {
        let request = DesignRequest::from_json(r#"{"strand_count": 200, "wire_awg": 36}"#).unwrap();
        assert_eq!(request, DesignRequest::new(200, 36));
        assert_eq!(request.magnet_wire_grade, "MW 79-C");
        assert_eq!(request.litz_type, LitzType::Type1);
        assert_eq!(request.film_types.len(), 4);
        assert_eq!(request.layers.len(), 3);
        assert_eq!(request.temperature_c, 20.0);
    }

    #[test]
    fn test_request_full_json() {
        let json = r#"{
            "strand_count": 100,
            "wire_awg": 30,
            "litz_type": "Type 2",
            "wire_type": "insulated",
            "insulation_type": "PFA",
            "layers": [2],
            "serve_type": "Double Nylon Serve"
        }"#;
        let request = DesignRequest::from_json(json).unwrap();
        assert_eq!(request.litz_type, LitzType::Type2);
        assert_eq!(request.wire_type, WireType::Insulated);
        assert_eq!(request.insulation_type, InsulationType::Pfa);
        assert_eq!(request.layers, vec![InsulationLayers::Double]);
        assert_eq!(request.serve_type, Some(ServeType::Double));
    }

    #[test]
    fn test_request_rejects_bad_json() {
        let err = DesignRequest::from_json(r#"{"strand_count": 200}"#).unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
        let json = r#"{"strand_count": 200, "wire_awg": 36, "layers": [4]}"#;
        let err = DesignRequest::from_json(json).unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }

    #[test]
    fn test_request_domain_checks() {
        assert!(evaluate_design(&DesignRequest::new(200, 9)).is_err());
        assert!(evaluate_design(&DesignRequest::new(200, 51)).is_err());
        let mut request = DesignRequest::new(200, 36);
        request.frequency_hz = 0.0;
        assert!(evaluate_design(&request).is_err());
    }

    #[test]
    fn test_bare_design_200_36() {
        let mut request = DesignRequest::new(200, 36);
        request.serve_type = Some(ServeType::Single);
        let report = evaluate_design(&request).unwrap();

        assert!(report.is_valid());
        assert_eq!(report.construction.number_of_operations, 2);
        assert_eq!(report.construction.equivalent_awg, "14 AWG");
        assert!(report.insulated.is_empty());
        assert!(report.advisories.is_empty());

        let single = &report.bare[0];
        assert_eq!(single.film_type, FilmType::Single);
        let bare = single.bare.as_ref().unwrap();
        assert_eq!(bare.nom, dec!(0.091));
        assert_eq!(single.served.as_ref().unwrap().part_number, "RL-200-36S79-SN-XX");
        assert!(report.electrical.is_some());
    }

    #[test]
    fn test_unavailable_film_is_skipped() {
        // 105 = 21 × 5 at AWG 48 (max 21 per operation)
        let report = evaluate_design(&DesignRequest::new(105, 48)).unwrap();
        assert!(report.is_valid());
        let triple = report.bare.iter().find(|f| f.film_type == FilmType::Triple).unwrap();
        assert!(triple.bare.is_none());
        assert_eq!(triple.skipped.as_deref(), Some("Triple film not available for AWG 48"));
        let heavy = report.bare.iter().find(|f| f.film_type == FilmType::Heavy).unwrap();
        assert!(heavy.bare.is_some());
    }

    #[test]
    fn test_insulated_design_warnings() {
        let mut request = DesignRequest::new(200, 36);
        request.wire_type = WireType::Insulated;
        request.insulation_type = InsulationType::Etfe;
        let report = evaluate_design(&request).unwrap();

        assert_eq!(report.insulated.len(), 3);
        let noms: Vec<_> = report.insulated.iter().map(|i| i.diameters.nom).collect();
        assert_eq!(noms, vec![dec!(0.102), dec!(0.103), dec!(0.124)]);

        // 5000 CMA of ETFE cannot carry UL approval on a single jacket
        assert_eq!(
            report.insulated[0].ul_warnings,
            vec!["THIS PART WILL NOT CARRY UL APPROVALS. CONSIDER FEP INSULATION OR SUPPLEMENTAL/REINFORCED INSULATION."]
        );
        assert!(report.insulated[0].manufacturing_warnings.is_empty());
        assert!(!report.all_warnings().is_empty());
    }

    #[test]
    fn test_requested_wall_below_minimum() {
        let mut request = DesignRequest::new(200, 36);
        request.wire_type = WireType::Insulated;
        request.insulation_type = InsulationType::Fep;
        request.layers = vec![InsulationLayers::Single];
        request.requested_wall_in = Some(dec!(0.002));
        let report = evaluate_design(&request).unwrap();

        let single = &report.insulated[0];
        // 4900 stranded CMA of single FEP needs 0.003 in
        assert_eq!(single.diameters.wall_thickness_inches, Some(dec!(0.003)));
        assert_eq!(single.diameters.part_number, "SXXL200/36FX-3(MW79)");
        assert_eq!(
            single.manufacturing_warnings,
            vec!["CONSULT RUBADUE ENGINEERING TO VERIFY MANUFACTURING CAPABILITY ON THIS WALL THICKNESS."]
        );
        assert_eq!(
            single.ul_warnings,
            vec![
                "INCREASE WALL THICKNESSES IF UL APPROVALS ARE REQUIRED. IF UL APPROVALS ARE NOT REQUIRED, CONSULT THE FACTORY TO CONFIRM MANUFACTURABILITY."
            ]
        );
    }

    #[test]
    fn test_requested_wall_under_single_layer_floor() {
        let mut request = DesignRequest::new(200, 36);
        request.wire_type = WireType::Insulated;
        request.insulation_type = InsulationType::Etfe;
        request.requested_wall_in = Some(dec!(0.001));
        let report = evaluate_design(&request).unwrap();

        let single = &report.insulated[0];
        assert_eq!(single.diameters.wall_thickness_inches, Some(dec!(0.0015)));
        assert_eq!(
            single.manufacturing_warnings,
            vec!["CONSULT RUBADUE ENGINEERING TO VERIFY MANUFACTURING CAPABILITY ON THIS WALL THICKNESS."]
        );
        // Double and triple ETFE accept 0.001 in
        assert!(report.insulated[1].manufacturing_warnings.is_empty());
        assert!(report.insulated[2].manufacturing_warnings.is_empty());
    }

    #[test]
    fn test_requested_wall_accepted() {
        let mut request = DesignRequest::new(200, 36);
        request.wire_type = WireType::Insulated;
        request.insulation_type = InsulationType::Fep;
        request.layers = vec![InsulationLayers::Single];
        request.requested_wall_in = Some(dec!(0.004));
        let report = evaluate_design(&request).unwrap();

        let single = &report.insulated[0];
        assert_eq!(single.diameters.wall_thickness_inches, Some(dec!(0.004)));
        assert!(single.manufacturing_warnings.is_empty());
        assert!(single.ul_warnings.is_empty());
    }

    #[test]
    fn test_sized_wall_has_no_wall_warning() {
        // 78 × 24.5 = 1911 stranded CMA, 1950 diameter-derived
        let mut request = DesignRequest::new(78, 36);
        request.wire_type = WireType::Insulated;
        request.insulation_type = InsulationType::Fep;
        let report = evaluate_design(&request).unwrap();
        assert!(report.is_valid());
        for layer in &report.insulated {
            assert!(layer.manufacturing_warnings.is_empty(), "{}", layer.layers);
        }
    }

    #[test]
    fn test_rejects_non_positive_wall() {
        let mut request = DesignRequest::new(200, 36);
        request.requested_wall_in = Some(Decimal::ZERO);
        let err = evaluate_design(&request).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_invalid_construction_report() {
        let report = evaluate_design(&DesignRequest::new(67, 36)).unwrap();
        assert!(!report.is_valid());
        assert!(!report.validation.nearby_valid.is_empty());
        assert!(report.bare.is_empty());
        assert!(report.insulated.is_empty());
        assert!(report.electrical.is_none());
    }

    #[test]
    fn test_advisories_reported() {
        // AWG 20 takes 4 strands per operation; 20 = 4 × 5
        let report = evaluate_design(&DesignRequest::new(20, 20)).unwrap();
        assert!(report.is_valid());
        assert_eq!(report.advisories, vec!["CONSULT RUBADUE ENGINEERING."]);
    }

    #[test]
    fn test_report_serializes() {
        let report = evaluate_design(&DesignRequest::new(200, 36)).unwrap();
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"part_number\":\"RL-200-36S79-XX\""));
        let roundtrip: DesignReport = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip.construction.equivalent_awg, "14 AWG");
    }
}
