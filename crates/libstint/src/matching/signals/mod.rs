mod availability;
mod coursework;
mod experience;
mod graduation;
mod location_mode;
mod major;
mod skills;

pub(crate) use self::{
  availability::AvailabilityFit,
  coursework::CourseworkAlignment,
  experience::ExperienceAlignment,
  graduation::GraduationYearFit,
  location_mode::LocationModeFit,
  major::MajorAlignment,
  skills::{PreferredSkills, RequiredSkills},
};
