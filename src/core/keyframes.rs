// Piecewise-linear camera keyframes over scroll progress.

use smallvec::SmallVec;

const EPS: f32 = 1e-4;

/// Camera parameters interpolated along the scroll path.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CameraKey {
    /// Lateral shift of the look-at target, relative to the camera's right axis.
    pub offset: f32,
    pub radius: f32,
    pub height: f32,
}

impl CameraKey {
    pub const fn new(offset: f32, radius: f32, height: f32) -> Self {
        Self {
            offset,
            radius,
            height,
        }
    }

    #[inline]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        Self {
            offset: self.offset + (other.offset - self.offset) * t,
            radius: self.radius + (other.radius - self.radius) * t,
            height: self.height + (other.height - self.height) * t,
        }
    }

    fn approx_eq(self, other: Self) -> bool {
        (self.offset - other.offset).abs() < EPS
            && (self.radius - other.radius).abs() < EPS
            && (self.height - other.height).abs() < EPS
    }
}

/// One sub-range `[start, end)` of progress with its own interpolation endpoints.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub start: f32,
    pub end: f32,
    pub from: CameraKey,
    pub to: CameraKey,
}

impl Segment {
    pub const fn new(start: f32, end: f32, from: CameraKey, to: CameraKey) -> Self {
        Self {
            start,
            end,
            from,
            to,
        }
    }

    /// Segment that holds a single key for its whole range.
    pub const fn hold(start: f32, end: f32, key: CameraKey) -> Self {
        Self::new(start, end, key, key)
    }

    #[inline]
    pub fn span(&self) -> f32 {
        self.end - self.start
    }

    /// Local parameter in [0, 1] for a progress value.
    #[inline]
    pub fn local(&self, progress: f32) -> f32 {
        ((progress - self.start) / self.span()).clamp(0.0, 1.0)
    }

    #[inline]
    pub fn sample(&self, progress: f32) -> CameraKey {
        self.from.lerp(self.to, self.local(progress))
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum KeyframeError {
    #[error("keyframe track has no segments")]
    Empty,
    #[error("first segment starts at {0}, expected 0")]
    StartNotZero(f32),
    #[error("last segment ends at {0}, expected 1")]
    EndNotOne(f32),
    #[error("segment {index} has non-positive length")]
    Degenerate { index: usize },
    #[error("segment {index} starts at {found}, expected {expected}")]
    Gap {
        index: usize,
        expected: f32,
        found: f32,
    },
    #[error("segment {index} does not continue from the previous segment")]
    Discontinuity { index: usize },
}

/// Ordered, contiguous segments covering [0, 1].
#[derive(Clone, Debug, PartialEq)]
pub struct KeyframeTrack {
    segments: SmallVec<[Segment; 4]>,
}

impl KeyframeTrack {
    pub fn new(segments: impl IntoIterator<Item = Segment>) -> Result<Self, KeyframeError> {
        let segments: SmallVec<[Segment; 4]> = segments.into_iter().collect();
        let (first, last) = match (segments.first(), segments.last()) {
            (Some(f), Some(l)) => (f, l),
            _ => return Err(KeyframeError::Empty),
        };
        if first.start.abs() > EPS {
            return Err(KeyframeError::StartNotZero(first.start));
        }
        if (last.end - 1.0).abs() > EPS {
            return Err(KeyframeError::EndNotOne(last.end));
        }
        for (index, seg) in segments.iter().enumerate() {
            if seg.span().is_nan() || seg.span() <= 0.0 {
                return Err(KeyframeError::Degenerate { index });
            }
            if index == 0 {
                continue;
            }
            let prev = &segments[index - 1];
            if (seg.start - prev.end).abs() > EPS {
                return Err(KeyframeError::Gap {
                    index,
                    expected: prev.end,
                    found: seg.start,
                });
            }
            if !seg.from.approx_eq(prev.to) {
                return Err(KeyframeError::Discontinuity { index });
            }
        }
        Ok(Self { segments })
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Interior boundaries between segments, in order.
    pub fn boundaries(&self) -> impl Iterator<Item = f32> + '_ {
        self.segments.iter().skip(1).map(|s| s.start)
    }

    /// Index of the segment owning `progress`; a boundary belongs to the later segment.
    pub fn segment_index(&self, progress: f32) -> usize {
        let last = self.segments.len() - 1;
        self.segments[..last]
            .iter()
            .position(|s| progress < s.end)
            .unwrap_or(last)
    }

    pub fn sample(&self, progress: f32) -> CameraKey {
        let progress = progress.clamp(0.0, 1.0);
        self.segments[self.segment_index(progress)].sample(progress)
    }
}
