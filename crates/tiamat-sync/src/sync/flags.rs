use bitflags::bitflags;

bitflags! {
    /// Pipeline stages usable as synchronization anchors.
    ///
    /// Multiple stages may be OR-combined. Bit positions follow the Vulkan
    /// stage model so explicit backends can translate by value.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
    pub struct PipelineStages: u32 {
        const TOP_OF_PIPE              = 1 << 0;
        const DRAW_INDIRECT            = 1 << 1;
        const VERTEX_INPUT             = 1 << 2;
        const VERTEX_SHADER            = 1 << 3;
        const FRAGMENT_SHADER          = 1 << 7;
        const COLOR_ATTACHMENT_OUTPUT  = 1 << 10;
        const COMPUTE_SHADER           = 1 << 11;
        const TRANSFER                 = 1 << 12;
        const BOTTOM_OF_PIPE           = 1 << 13;
        const HOST                     = 1 << 14;
        const ALL_COMMANDS             = 1 << 16;
    }
}

bitflags! {
    /// How a stage reads or writes memory.
    ///
    /// Bit positions follow the Vulkan access model.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
    pub struct Access: u32 {
        const INDIRECT_COMMAND_READ    = 1 << 0;
        const INDEX_READ               = 1 << 1;
        const VERTEX_ATTRIBUTE_READ    = 1 << 2;
        const UNIFORM_READ             = 1 << 3;
        const SHADER_READ              = 1 << 5;
        const SHADER_WRITE             = 1 << 6;
        const TRANSFER_READ            = 1 << 11;
        const TRANSFER_WRITE           = 1 << 12;
        const HOST_READ                = 1 << 13;
        const HOST_WRITE               = 1 << 14;
        const MEMORY_READ              = 1 << 15;
        const MEMORY_WRITE             = 1 << 16;
    }
}
