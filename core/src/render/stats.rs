//! Rendering statistics.

use alloc::{format, string::String};
use core::fmt::{self, Display, Formatter};
use core::ops::AddAssign;
use core::time::Duration;
#[cfg(feature = "std")]
use std::time::Instant;

//
// Types
//

/// Collects and accumulates rendering statistics and performance data.
#[derive(Clone, Debug, Default)]
pub struct Stats {
    /// Time spent rendering.
    pub time: Duration,
    /// Number of draw calls issued.
    pub calls: f32,
    /// Number of frames rendered.
    pub frames: f32,

    /// Vertices submitted and vertices that ended up inside the canvas.
    pub verts: Throughput,
    /// Primitives submitted and primitives that wrote at least one pixel.
    pub prims: Throughput,
    /// Number of pixels written.
    pub pixels: usize,

    #[cfg(feature = "std")]
    start: Option<Instant>,
}

/// Number of items input to and output from a rendering stage.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Throughput {
    // Count of items submitted for rendering.
    pub i: usize,
    // Count of items output to the canvas.
    pub o: usize,
}

//
// Impls
//

impl Stats {
    /// Creates a new zeroed `Stats` instance.
    pub fn new() -> Self {
        Self::default()
    }
    /// Creates a `Stats` instance that records the time of its creation.
    ///
    /// Call [`finish`][Self::finish] to write the elapsed time to `self.time`.
    ///
    /// Equivalent to [`Stats::new`] if the `std` feature is not enabled.
    pub fn start() -> Self {
        Self {
            #[cfg(feature = "std")]
            start: Some(Instant::now()),
            ..Self::default()
        }
    }

    /// Stops the timer and records the elapsed time to `self.time`.
    ///
    /// No-op if the timer was not running, or unless the `std` feature
    /// is enabled.
    #[must_use]
    pub fn finish(self) -> Self {
        Self {
            #[cfg(feature = "std")]
            time: self.start.map(|st| st.elapsed()).unwrap_or(self.time),
            #[cfg(feature = "std")]
            start: None,
            ..self
        }
    }

    /// Returns the average number of frames per second, or zero if no
    /// time has been recorded.
    pub fn fps(&self) -> f32 {
        if self.time.is_zero() {
            0.0
        } else {
            self.frames / self.time.as_secs_f32()
        }
    }

    /// Returns the averages of `self` per frame.
    pub fn per_frame(&self) -> Self {
        let frames = self.frames.max(1.0);
        let n = frames as usize;
        Self {
            time: self.time.div_f32(frames),
            calls: self.calls / frames,
            frames: 1.0,
            verts: self.verts.per_frame(n),
            prims: self.prims.per_frame(n),
            pixels: self.pixels / n,
            #[cfg(feature = "std")]
            start: None,
        }
    }
}

impl Throughput {
    fn per_frame(&self, frames: usize) -> Self {
        Self {
            i: self.i / frames,
            o: self.o / frames,
        }
    }
}

impl Display for Stats {
    #[rustfmt::skip]
    #[inline(never)]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let w = f.width().unwrap_or(16);
        let per_f = self.per_frame();
        write!(f,
            " STATS  {:>w$} │ {:>w$}\n\
             ────────{empty:─>w$}─┼─{empty:─>w$}─\n \
              time   {:>w$} │ {:>w$}\n \
              calls  {:>w$} │ {:>w$.1}\n \
              frames {:>w$} │ {:>w$}\n\
             ────────{empty:─>w$}─┼─{empty:─>w$}─\n",
            "TOTAL", "PER FRAME",
            human_time(self.time), human_time(per_f.time),
            self.calls, per_f.calls,
            self.frames, format!("{:.1} fps", self.fps()),
            empty = ""
        )?;
        writeln!(f, " verts  {:w$} │ {:w$}", self.verts, per_f.verts)?;
        writeln!(f, " prims  {:w$} │ {:w$}", self.prims, per_f.prims)?;
        writeln!(f, " pixels {:>w$} │ {:>w$}",
            human_num(self.pixels), human_num(per_f.pixels))
    }
}

impl Display for Throughput {
    #[inline(never)]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let &Self { i, o } = self;
        let w = f.width().unwrap_or(10);
        let io = format!("{} / {}", human_num(i), human_num(o));
        write!(f, "{io:>w$}")
    }
}

impl AddAssign for Stats {
    /// Appends the stats of `other` to `self`.
    fn add_assign(&mut self, other: Self) {
        self.time += other.time;
        self.calls += other.calls;
        self.frames += other.frames;
        self.verts += other.verts;
        self.prims += other.prims;
        self.pixels += other.pixels;
    }
}

impl AddAssign for Throughput {
    fn add_assign(&mut self, rhs: Self) {
        self.i += rhs.i;
        self.o += rhs.o;
    }
}

#[inline(never)]
fn human_num(n: usize) -> String {
    if n < 1_000 {
        format!("{n:5}")
    } else if n < 100_000 {
        format!("{:4.1}k", n as f32 / 1_000.)
    } else if n < 1_000_000 {
        format!("{:4}k", n / 1_000)
    } else if n < 100_000_000 {
        format!("{:4.1}M", n as f32 / 1_000_000.)
    } else if n < 1_000_000_000 {
        format!("{:4}M", n / 1_000_000)
    } else {
        format!("{n:5.1e}")
    }
}

#[inline(never)]
fn human_time(d: Duration) -> String {
    let secs = d.as_secs_f32();
    if secs < 1e-3 {
        format!("{:4.1}μs", secs * 1_000_000.)
    } else if secs < 1.0 {
        format!("{:4.1}ms", secs * 1_000.)
    } else if secs < 60.0 {
        format!("{:.1}s", secs)
    } else {
        format!("{:.0}min {:02.0}s", secs / 60.0, secs % 60.0)
    }
}

#[cfg(test)]
mod tests {
    use core::time::Duration;

    use super::*;

    fn sample() -> Stats {
        Stats {
            time: Duration::from_millis(2000),
            calls: 500.0,
            frames: 100.0,
            verts: Throughput { i: 3000, o: 2500 },
            prims: Throughput { i: 1000, o: 900 },
            pixels: 1_234_567,
            ..Stats::default()
        }
    }

    #[test]
    fn stats_display() {
        assert_eq!(
            format!("{}", sample()),
            " \
 STATS             TOTAL │        PER FRAME
─────────────────────────┼──────────────────
 time               2.0s │           20.0ms
 calls               500 │              5.0
 frames              100 │         50.0 fps
─────────────────────────┼──────────────────
 verts      3.0k /  2.5k │       30 /    25
 prims      1.0k /   900 │       10 /     9
 pixels             1.2M │            12.3k
"
        );
    }

    #[test]
    fn add_assign_accumulates() {
        let mut s = sample();
        s += sample();
        assert_eq!(s.calls, 1000.0);
        assert_eq!(s.verts, Throughput { i: 6000, o: 5000 });
        assert_eq!(s.pixels, 2_469_134);
        assert_eq!(s.time, Duration::from_secs(4));
    }

    #[test]
    fn fps() {
        assert_eq!(sample().fps(), 50.0);
        assert_eq!(Stats::new().fps(), 0.0);
    }

    #[test]
    fn human_nums() {
        assert_eq!(human_num(10), "   10");
        assert_eq!(human_num(123), "  123");
        assert_eq!(human_num(1_234), " 1.2k");
        assert_eq!(human_num(123_456), " 123k");
        assert_eq!(human_num(1_234_567), " 1.2M");
        assert_eq!(human_num(123_456_789), " 123M");
    }

    #[test]
    fn human_times() {
        assert_eq!(human_time(Duration::from_micros(123)), "123.0μs");
        assert_eq!(human_time(Duration::from_millis(123)), "123.0ms");
        assert_eq!(human_time(Duration::from_millis(1234)), "1.2s");
        assert_eq!(human_time(Duration::from_secs(1234)), "21min 34s");
    }
}
