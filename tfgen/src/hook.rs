//! Names of the testing functions we know how to call.
//! See `js/src/builtin/TestingFunctions.cpp` in mozilla-central.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Hook {
    /// Full garbage collection, of everything or of one compartment.
    Gc,
    /// Nursery collection.
    MinorGc,
    /// One slice of an incremental collection.
    GcSlice,
    /// Collect every N allocations, in one of several modes.
    GcZeal,
    /// Collect after N allocations, or add a compartment to the next collection.
    ScheduleGc,
    /// Mark an object in the next slice.
    SelectForGc,
    VerifyPreBarriers,
    VerifyPostBarriers,
    /// Trace the heap with non-GC tracing code.
    CountHeap,
    ValidateGc,
    FullCompartmentChecks,
    SetIonCheckGraphCoherency,
    SetJitCompilerOption,
    EnableOsiPointRegisterChecks,
    DeterministicGc,
    /// Keep JIT code alive across collections.
    GcPreserveCode,
}

impl Hook {
    pub const ALL: [Hook; 16] = [
        Hook::Gc,
        Hook::MinorGc,
        Hook::GcSlice,
        Hook::GcZeal,
        Hook::ScheduleGc,
        Hook::SelectForGc,
        Hook::VerifyPreBarriers,
        Hook::VerifyPostBarriers,
        Hook::CountHeap,
        Hook::ValidateGc,
        Hook::FullCompartmentChecks,
        Hook::SetIonCheckGraphCoherency,
        Hook::SetJitCompilerOption,
        Hook::EnableOsiPointRegisterChecks,
        Hook::DeterministicGc,
        Hook::GcPreserveCode,
    ];

    /// The identifier the engine exposes this function under.
    pub fn name(self) -> &'static str {
        use Hook::*;
        match self {
            Gc => "gc",
            MinorGc => "minorgc",
            GcSlice => "gcslice",
            GcZeal => "gczeal",
            ScheduleGc => "schedulegc",
            SelectForGc => "selectforgc",
            VerifyPreBarriers => "verifyprebarriers",
            VerifyPostBarriers => "verifypostbarriers",
            CountHeap => "countHeap",
            ValidateGc => "validategc",
            FullCompartmentChecks => "fullcompartmentchecks",
            SetIonCheckGraphCoherency => "setIonCheckGraphCoherency",
            SetJitCompilerOption => "setJitCompilerOption",
            EnableOsiPointRegisterChecks => "enableOsiPointRegisterChecks",
            DeterministicGc => "deterministicgc",
            GcPreserveCode => "gcPreserveCode",
        }
    }

    /// Write barrier verification only does anything in pairs:
    /// the first call starts verifying, the second one checks.
    /// A lone call is a no-op.
    pub fn is_paired(self) -> bool {
        matches!(self, Hook::VerifyPreBarriers | Hook::VerifyPostBarriers)
    }
}

impl ::core::fmt::Display for Hook {
    fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
        f.write_str(self.name())
    }
}
