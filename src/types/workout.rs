pub const DEFAULT_STEP_LENGTH_M: f64 = 0.65;
pub const SWIM_STROKE_LENGTH_M: f64 = 1.38;
pub const M_IN_KM: f64 = 1000.0;
pub const MIN_IN_HOUR: f64 = 60.0;

const RUN_SPEED_FACTOR: f64 = 18.0;
const RUN_SPEED_DEDUCTION: f64 = 20.0;
const WALK_WEIGHT_FACTOR: f64 = 0.035;
const WALK_HEIGHT_FACTOR: f64 = 0.029;
const SWIM_SPEED_OFFSET: f64 = 1.1;
const SWIM_WEIGHT_FACTOR: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityKind {
    Running,
    SportsWalking,
    Swimming,
}

impl ActivityKind {
    /// Dispatch table order: swimming, running, walking.
    pub const ALL: [ActivityKind; 3] = [
        ActivityKind::Swimming,
        ActivityKind::Running,
        ActivityKind::SportsWalking,
    ];

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "SWM" => Some(ActivityKind::Swimming),
            "RUN" => Some(ActivityKind::Running),
            "WLK" => Some(ActivityKind::SportsWalking),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ActivityKind::Running => "RUN",
            ActivityKind::SportsWalking => "WLK",
            ActivityKind::Swimming => "SWM",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ActivityKind::Running => "Running",
            ActivityKind::SportsWalking => "SportsWalking",
            ActivityKind::Swimming => "Swimming",
        }
    }

    /// Positional layout of the sensor `data` tuple for this activity.
    pub fn fields(&self) -> &'static [&'static str] {
        match self {
            ActivityKind::Running => &["action_count", "duration_hours", "weight_kg"],
            ActivityKind::SportsWalking => {
                &["action_count", "duration_hours", "weight_kg", "height_cm"]
            }
            ActivityKind::Swimming => &[
                "action_count",
                "duration_hours",
                "weight_kg",
                "pool_length_m",
                "pool_lap_count",
            ],
        }
    }

    pub fn arity(&self) -> usize {
        self.fields().len()
    }
}

/// Shared contract of every workout variant.
///
/// `spent_calories_kcal` has no default: each activity brings its own formula.
pub trait Training {
    const STEP_LENGTH_M: f64 = DEFAULT_STEP_LENGTH_M;

    fn kind(&self) -> ActivityKind;
    fn action_count(&self) -> u32;
    fn duration_hours(&self) -> f64;
    fn weight_kg(&self) -> f64;

    fn distance_km(&self) -> f64 {
        self.action_count() as f64 * Self::STEP_LENGTH_M / M_IN_KM
    }

    fn mean_speed_kmh(&self) -> f64 {
        self.distance_km() / self.duration_hours()
    }

    fn spent_calories_kcal(&self) -> f64;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Running {
    pub action_count: u32,
    pub duration_hours: f64,
    pub weight_kg: f64,
}

impl Running {
    pub fn new(action_count: u32, duration_hours: f64, weight_kg: f64) -> Self {
        Self {
            action_count,
            duration_hours,
            weight_kg,
        }
    }
}

impl Training for Running {
    fn kind(&self) -> ActivityKind {
        ActivityKind::Running
    }

    fn action_count(&self) -> u32 {
        self.action_count
    }

    fn duration_hours(&self) -> f64 {
        self.duration_hours
    }

    fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    fn spent_calories_kcal(&self) -> f64 {
        ((RUN_SPEED_FACTOR * self.mean_speed_kmh() - RUN_SPEED_DEDUCTION) * self.weight_kg
            / M_IN_KM)
            * (self.duration_hours * MIN_IN_HOUR)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SportsWalking {
    pub action_count: u32,
    pub duration_hours: f64,
    pub weight_kg: f64,
    pub height_cm: f64,
}

impl SportsWalking {
    pub fn new(action_count: u32, duration_hours: f64, weight_kg: f64, height_cm: f64) -> Self {
        Self {
            action_count,
            duration_hours,
            weight_kg,
            height_cm,
        }
    }
}

impl Training for SportsWalking {
    fn kind(&self) -> ActivityKind {
        ActivityKind::SportsWalking
    }

    fn action_count(&self) -> u32 {
        self.action_count
    }

    fn duration_hours(&self) -> f64 {
        self.duration_hours
    }

    fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    fn spent_calories_kcal(&self) -> f64 {
        // Squared speed is floor-divided by height, so anything below the
        // height in cm contributes nothing.
        let speed_term = floor_div(self.mean_speed_kmh().powi(2), self.height_cm);
        (WALK_WEIGHT_FACTOR * self.weight_kg + speed_term * WALK_HEIGHT_FACTOR * self.weight_kg)
            * (self.duration_hours * MIN_IN_HOUR)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Swimming {
    pub action_count: u32,
    pub duration_hours: f64,
    pub weight_kg: f64,
    pub pool_length_m: f64,
    pub pool_lap_count: u32,
}

impl Swimming {
    pub fn new(
        action_count: u32,
        duration_hours: f64,
        weight_kg: f64,
        pool_length_m: f64,
        pool_lap_count: u32,
    ) -> Self {
        Self {
            action_count,
            duration_hours,
            weight_kg,
            pool_length_m,
            pool_lap_count,
        }
    }
}

impl Training for Swimming {
    const STEP_LENGTH_M: f64 = SWIM_STROKE_LENGTH_M;

    fn kind(&self) -> ActivityKind {
        ActivityKind::Swimming
    }

    fn action_count(&self) -> u32 {
        self.action_count
    }

    fn duration_hours(&self) -> f64 {
        self.duration_hours
    }

    fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    fn mean_speed_kmh(&self) -> f64 {
        self.pool_length_m * self.pool_lap_count as f64 / M_IN_KM / self.duration_hours
    }

    fn spent_calories_kcal(&self) -> f64 {
        (self.mean_speed_kmh() + SWIM_SPEED_OFFSET) * SWIM_WEIGHT_FACTOR * self.weight_kg
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Workout {
    Running(Running),
    SportsWalking(SportsWalking),
    Swimming(Swimming),
}

macro_rules! each_variant {
    ($self:expr, $w:ident => $body:expr) => {
        match $self {
            Workout::Running($w) => $body,
            Workout::SportsWalking($w) => $body,
            Workout::Swimming($w) => $body,
        }
    };
}

impl Workout {
    pub fn kind(&self) -> ActivityKind {
        each_variant!(self, w => w.kind())
    }

    pub fn action_count(&self) -> u32 {
        each_variant!(self, w => w.action_count())
    }

    pub fn duration_hours(&self) -> f64 {
        each_variant!(self, w => w.duration_hours())
    }

    pub fn weight_kg(&self) -> f64 {
        each_variant!(self, w => w.weight_kg())
    }

    pub fn distance_km(&self) -> f64 {
        each_variant!(self, w => w.distance_km())
    }

    pub fn mean_speed_kmh(&self) -> f64 {
        each_variant!(self, w => w.mean_speed_kmh())
    }

    pub fn spent_calories_kcal(&self) -> f64 {
        each_variant!(self, w => w.spent_calories_kcal())
    }
}

impl From<Running> for Workout {
    fn from(w: Running) -> Self {
        Workout::Running(w)
    }
}

impl From<SportsWalking> for Workout {
    fn from(w: SportsWalking) -> Self {
        Workout::SportsWalking(w)
    }
}

impl From<Swimming> for Workout {
    fn from(w: Swimming) -> Self {
        Workout::Swimming(w)
    }
}

/// Floored float division: quotient taken from `fmod`, then floored and
/// nudged up when the remainder rounding leaves it more than half a step low.
pub fn floor_div(x: f64, y: f64) -> f64 {
    let rem = x % y;
    let mut div = (x - rem) / y;
    if rem != 0.0 && (y < 0.0) != (rem < 0.0) {
        div -= 1.0;
    }
    if div == 0.0 {
        return 0.0_f64.copysign(x / y);
    }
    let floored = div.floor();
    if div - floored > 0.5 {
        floored + 1.0
    } else {
        floored
    }
}
