/// Header line of the CSV report.
pub(crate) const REPORT_HEADER: &str = "EmployeeID#1,EmployeeID#2,ProjectID,DaysWorked";

/// Printed when no two employees ever shared a project on the same day.
pub(crate) const NO_OVERLAP_MESSAGE: &str = "No employees have worked together on common projects";
