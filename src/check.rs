//! Property checks over the math library
//!
//! Evaluates the algebraic identities of the `psm_math` types against the
//! sample inputs of a [`CheckConfig`] and collects the results in a
//! [`CheckReport`]. Approximate comparisons use the configured tolerance,
//! scaled by the magnitude of the operands involved.

use psm_math::{MathError, Matrix4x4, Plane, Quaternion, Vector2, Vector3, Vector4};

use crate::config::CheckConfig;

/// Result of a single check
#[derive(Debug, Clone, PartialEq)]
pub enum CheckStatus {
    Passed,
    Failed(String),
    /// The check does not apply to the sample (e.g. a singular matrix)
    Skipped(String),
}

/// A named check and its result
#[derive(Debug, Clone, PartialEq)]
pub struct CheckOutcome {
    pub name: String,
    pub status: CheckStatus,
}

/// Collected outcomes of a check run
#[derive(Debug, Default)]
pub struct CheckReport {
    outcomes: Vec<CheckOutcome>,
}

impl CheckReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome of a check
    pub fn record(&mut self, name: impl Into<String>, status: CheckStatus) {
        let name = name.into();
        match &status {
            CheckStatus::Passed => log::debug!("{} ... ok", name),
            CheckStatus::Failed(reason) => log::warn!("{} ... FAILED: {}", name, reason),
            CheckStatus::Skipped(reason) => log::debug!("{} ... skipped ({})", name, reason),
        }
        self.outcomes.push(CheckOutcome { name, status });
    }

    /// Record a pass, or a failure described by `detail`
    fn expect(&mut self, name: impl Into<String>, ok: bool, detail: impl FnOnce() -> String) {
        let status = if ok {
            CheckStatus::Passed
        } else {
            CheckStatus::Failed(detail())
        };
        self.record(name, status);
    }

    pub fn outcomes(&self) -> &[CheckOutcome] {
        &self.outcomes
    }

    pub fn passed(&self) -> usize {
        self.count(|s| matches!(s, CheckStatus::Passed))
    }

    pub fn failed(&self) -> usize {
        self.count(|s| matches!(s, CheckStatus::Failed(_)))
    }

    pub fn skipped(&self) -> usize {
        self.count(|s| matches!(s, CheckStatus::Skipped(_)))
    }

    /// True when no check failed
    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }

    /// One-line summary of the run
    pub fn summary(&self) -> String {
        format!(
            "{} checks: {} passed, {} failed, {} skipped",
            self.outcomes.len(),
            self.passed(),
            self.failed(),
            self.skipped()
        )
    }

    fn count(&self, pred: impl Fn(&CheckStatus) -> bool) -> usize {
        self.outcomes.iter().filter(|o| pred(&o.status)).count()
    }
}

/// Run every check over the configured samples
pub fn run_checks(config: &CheckConfig) -> CheckReport {
    log::info!(
        "Running checks over {} vectors, {} quaternions, {} matrices (tolerance {})",
        config.vectors.len(),
        config.quaternions.len(),
        config.matrices.len(),
        config.tolerance
    );

    let mut report = CheckReport::new();
    check_vectors(&mut report, &config.vectors, config.tolerance);
    check_quaternions(&mut report, &config.quaternions, config.tolerance);
    check_matrices(&mut report, &config.matrices, config.tolerance);
    check_planes(&mut report, &config.vectors, config.tolerance);
    report
}

/// `|a - b| <= tolerance * max(scale, 1)`
fn close(a: f32, b: f32, tolerance: f32, scale: f32) -> bool {
    (a - b).abs() <= tolerance * scale.max(1.0)
}

fn quat_close(a: Quaternion, b: Quaternion, tolerance: f32, scale: f32) -> bool {
    close(a.x, b.x, tolerance, scale)
        && close(a.y, b.y, tolerance, scale)
        && close(a.z, b.z, tolerance, scale)
        && close(a.w, b.w, tolerance, scale)
}

fn mat_close(a: Matrix4x4, b: Matrix4x4, tolerance: f32, scale: f32) -> bool {
    a.to_rows()
        .iter()
        .flatten()
        .zip(b.to_rows().iter().flatten())
        .all(|(&x, &y)| close(x, y, tolerance, scale))
}

fn max_abs(m: Matrix4x4) -> f32 {
    m.to_rows().iter().flatten().fold(0.0f32, |acc, v| acc.max(v.abs()))
}

#[rustfmt::skip]
fn matrix_from_row_major(c: &[f32; 16]) -> Matrix4x4 {
    Matrix4x4::new(
        c[0], c[1], c[2], c[3],
        c[4], c[5], c[6], c[7],
        c[8], c[9], c[10], c[11],
        c[12], c[13], c[14], c[15],
    )
}

fn check_vectors(report: &mut CheckReport, samples: &[[f32; 3]], tolerance: f32) {
    for (i, &s) in samples.iter().enumerate() {
        let v3 = Vector3::from(s);
        let v2 = Vector2::new(s[0], s[1]);
        let v4 = Vector4::from_vector3(v3, 1.0);

        let lengths = [
            ("vector2", v2.length(), v2.length_squared()),
            ("vector3", v3.length(), v3.length_squared()),
            ("vector4", v4.length(), v4.length_squared()),
        ];
        for (kind, len, len_sq) in lengths {
            report.expect(
                format!("{}[{}].length_squared", kind, i),
                close(len * len, len_sq, tolerance, len_sq),
                || format!("length² = {}, length_squared = {}", len * len, len_sq),
            );
        }

        let name = format!("vector3[{}].normalize", i);
        match v3.normalize() {
            Ok(n) => report.expect(name, close(n.length(), 1.0, tolerance, 1.0), || {
                format!("normalized length is {}", n.length())
            }),
            Err(MathError::ZeroLengthVector) => {
                report.expect(name, v3.magnitude() == 0.0, || {
                    format!("rejected non-zero magnitude {}", v3.magnitude())
                })
            }
            Err(e) => report.record(name, CheckStatus::Failed(e.to_string())),
        }

        for (j, &t) in samples.iter().enumerate().skip(i + 1) {
            let (a, b) = (v3, Vector3::from(t));

            report.expect(format!("vector3[{},{}].dot_commutes", i, j), a.dot(b) == b.dot(a), || {
                format!("{} != {}", a.dot(b), b.dot(a))
            });

            let ab = a.cross(b);
            let ba = b.cross(a);
            report.expect(
                format!("vector3[{},{}].cross_anticommutes", i, j),
                ab == -ba,
                || format!("{} != -{}", ab, ba),
            );

            let scale = a.length_squared() * b.length();
            report.expect(
                format!("vector3[{},{}].cross_orthogonal", i, j),
                close(a.dot(ab), 0.0, tolerance, scale),
                || format!("a . (a x b) = {}", a.dot(ab)),
            );
        }
    }
}

fn check_quaternions(report: &mut CheckReport, samples: &[[f32; 4]], tolerance: f32) {
    let zero = Quaternion::new(0.0, 0.0, 0.0, 0.0);
    report.expect("quaternion.zero_inverse_is_identity", zero.inverse() == Quaternion::IDENTITY, || {
        format!("got {}", zero.inverse())
    });

    let quats: Vec<Quaternion> = samples
        .iter()
        .map(|s| Quaternion::new(s[0], s[1], s[2], s[3]))
        .collect();

    for (i, &q) in quats.iter().enumerate() {
        report.expect(
            format!("quaternion[{}].conjugate_involution", i),
            q.conjugate().conjugate() == q,
            || format!("conjugate twice gave {}", q.conjugate().conjugate()),
        );

        if q.length_squared() == 0.0 {
            report.expect(format!("quaternion[{}].inverse", i), q.inverse() == Quaternion::IDENTITY, || {
                format!("zero quaternion inverted to {}", q.inverse())
            });
            report.record(
                format!("quaternion[{}].normalize", i),
                CheckStatus::Skipped("zero length".to_string()),
            );
            continue;
        }

        let product = q * q.inverse();
        report.expect(
            format!("quaternion[{}].inverse", i),
            quat_close(product, Quaternion::IDENTITY, tolerance, 1.0),
            || format!("q * q^-1 = {}", product),
        );

        let n = q.normalize();
        report.expect(
            format!("quaternion[{}].normalize", i),
            close(n.length(), 1.0, tolerance, 1.0),
            || format!("normalized length is {}", n.length()),
        );
    }

    for (i, &a) in quats.iter().enumerate() {
        for (j, &b) in quats.iter().enumerate().skip(i + 1) {
            for (k, &c) in quats.iter().enumerate().skip(j + 1) {
                let left = (a * b) * c;
                let right = a * (b * c);
                let scale = a.length() * b.length() * c.length();
                report.expect(
                    format!("quaternion[{},{},{}].mul_associative", i, j, k),
                    quat_close(left, right, tolerance, scale),
                    || format!("(ab)c = {}, a(bc) = {}", left, right),
                );
            }
        }
    }
}

fn check_matrices(report: &mut CheckReport, samples: &[[f32; 16]], tolerance: f32) {
    for (i, s) in samples.iter().enumerate() {
        let m = matrix_from_row_major(s);

        let left = Matrix4x4::multiply(Matrix4x4::IDENTITY, m);
        let right = Matrix4x4::multiply(m, Matrix4x4::IDENTITY);
        report.expect(format!("matrix[{}].identity", i), left == m && right == m, || {
            format!("I * M =\n{}\nM * I =\n{}", left, right)
        });

        let name = format!("matrix[{}].inverse", i);
        match m.inverse() {
            Ok(inv) => {
                let product = Matrix4x4::multiply(m, inv);
                let scale = 4.0 * max_abs(m) * max_abs(inv);
                report.expect(name, mat_close(product, Matrix4x4::IDENTITY, tolerance, scale), || {
                    format!("M * M^-1 =\n{}", product)
                });

                let det_product = m.determinant() * inv.determinant();
                report.expect(
                    format!("matrix[{}].determinant_of_inverse", i),
                    close(det_product, 1.0, tolerance, scale),
                    || format!("det(M) * det(M^-1) = {}", det_product),
                );
            }
            Err(MathError::SingularMatrix) => {
                report.record(name, CheckStatus::Skipped("singular".to_string()))
            }
            Err(e) => report.record(name, CheckStatus::Failed(e.to_string())),
        }
    }
}

fn check_planes(report: &mut CheckReport, samples: &[[f32; 3]], tolerance: f32) {
    let mut degenerate = Plane::from_components(0.0, 0.0, 0.0, 5.0);
    let before = degenerate;
    degenerate.normalize();
    report.expect("plane.zero_normal_normalize_is_noop", degenerate == before, || {
        format!("plane changed to {}", degenerate)
    });

    for (i, window) in samples.windows(3).enumerate() {
        let points = [
            Vector3::from(window[0]),
            Vector3::from(window[1]),
            Vector3::from(window[2]),
        ];
        let name = format!("plane[{}].from_points", i);
        match Plane::from_points(points[0], points[1], points[2]) {
            Ok(plane) => {
                let scale = points.iter().fold(1.0f32, |acc, p| acc.max(p.length()));
                let contains_all = points
                    .iter()
                    .all(|&p| close(plane.evaluate(p), 0.0, tolerance, scale));
                report.expect(name, contains_all, || format!("{} misses a defining point", plane));
                report.expect(
                    format!("plane[{}].unit_normal", i),
                    close(plane.normal.length(), 1.0, tolerance, 1.0),
                    || format!("normal length is {}", plane.normal.length()),
                );
            }
            Err(MathError::ZeroLengthVector) => {
                report.record(name, CheckStatus::Skipped("collinear points".to_string()))
            }
            Err(e) => report.record(name, CheckStatus::Failed(e.to_string())),
        }
    }
}
