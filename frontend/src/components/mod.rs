pub mod contest {
    pub mod multi_select;
    pub mod tabs;
}
pub mod footer;
pub mod nav;
